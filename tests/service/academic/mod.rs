mod assign_class_teacher;
mod create_grade;
