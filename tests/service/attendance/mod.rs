mod record_attendance;
