//! Registration Example
//!
//! Drives a registration form through a scripted session, the way a UI
//! would: one event at a time, reading errors and the result panel back
//! after each step. Debug logs go to `registration.log`.

use std::fs::File;

use regform::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

enum Event {
    Change(&'static str, &'static str),
    TogglePassword,
    Submit,
}

fn main() {
    let log_file = File::create("registration.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let script = [
        Event::Change("name", "<b>Jo</b><script>alert(1)</script>"),
        Event::Change("email", "jo@example"),
        Event::Submit,
        Event::Change("email", "jo@example.com"),
        Event::Change("password", "abc123"),
        Event::TogglePassword,
        Event::Change("password", "abc123!"),
        Event::Submit,
        Event::Change("name", ""),
    ];

    let mut form = RegistrationForm::new();
    for event in script {
        match event {
            Event::Change(field, value) => {
                println!("> {} = {:?}", field, value);
                form.on_field_change(field, value);
            }
            Event::TogglePassword => {
                form.on_toggle_password_visibility();
                println!("> show password: {}", form.show_password());
            }
            Event::Submit => match form.on_submit_requested() {
                Some(record) => println!("> submit: accepted {:?}", record),
                None => println!("> submit: rejected"),
            },
        }
        render(&form);
    }
}

fn render(form: &RegistrationForm) {
    for field in Field::ALL {
        if let Some(message) = form.error(field) {
            println!("    {:<8} {}", field, message);
        }
    }
    println!(
        "    submit {}",
        if form.is_valid() { "enabled" } else { "disabled" }
    );
    if let Some(result) = form.result() {
        println!("    result: name={} email={}", result.name, result.email);
    }
}
