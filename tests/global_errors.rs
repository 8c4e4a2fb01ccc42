//! tests/global_errors.rs
//! Aggregates the host-level outcome tests under tests/global_errors/,
//! one file per status code.

#[cfg(test)]
mod global_errors {
    #[path = "../global_errors/404.rs"]
    mod e404;

    #[path = "../global_errors/408.rs"]
    mod e408;

    #[path = "../global_errors/413.rs"]
    mod e413;
}
