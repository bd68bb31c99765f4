// Signup form validation demo
//
// Run with `cargo run --example signup_form`. Logs at DEBUG, so every failed
// rule is printed before the collected errors.

use rusty_validate::{email, fields, max, message, min, required, url, ErrorSink, Record, Validator};

#[derive(Debug, Record)]
#[record(rename_all = "PascalCase")]
struct SignupForm {
    pub username: String,
    pub email: String,
    pub website: String,
    pub age: u32,
    password: String,
}

#[derive(Debug, Default, ErrorSink)]
#[record(rename_all = "PascalCase")]
struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub age: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let form = SignupForm {
        username: "al".to_string(),
        email: "Al@Example.com".to_string(),
        website: "http://example".to_string(),
        age: 17,
        password: "secret".to_string(),
    };

    let spec = fields! {
        "Username" => [required, min(3), max(20)],
        "Email" => [required, email, message("please use a lowercase email address")],
        "Website" => [url],
        "Age" => [min(18)],
        "Password" => [min(12)],
    };

    let mut errors = SignupErrors::default();
    let ok = Validator::new(&form, spec).validate(&mut errors)?;

    println!("valid: {}", ok);
    println!("{:#?}", errors);
    println!("password length: {}", form.password.len());

    Ok(())
}
