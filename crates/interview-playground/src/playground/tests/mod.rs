mod common;
mod navigator;
mod review;
mod rubric;
mod stepper;
