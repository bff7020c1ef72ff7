//! Roster View Entry Point
//!
//! Sorting and name filtering for the server-rendered membership roster.

mod controller;
mod dom;
mod storage;

use controller::RosterController;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(RosterController);
}
