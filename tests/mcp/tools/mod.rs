mod config;
mod verify;
