mod appointment;
mod repository;
mod unit_of_work;
mod user;
