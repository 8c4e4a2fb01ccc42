/*
* API features. Each feature keeps its handlers next to its route definitions.
*/

pub mod status;
pub mod users;
