mod academic;
mod attendance;
mod transfer;
