//! Output formatting module

use owo_colors::OwoColorize;

use crate::api::response::RawResponse;

/// Print the response body exactly as received
pub fn print_body(response: &RawResponse) {
    println!("{}", response.body);
}

/// Print the numeric status code followed by the body
pub fn print_status_and_body(response: &RawResponse) {
    println!("{}", status_line(response));
}

fn status_line(response: &RawResponse) -> String {
    format!("{} {}", response.status.as_u16(), response.body)
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
