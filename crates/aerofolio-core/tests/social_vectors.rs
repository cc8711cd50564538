//! Social link record vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use aerofolio_core::content::SocialLink;

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_social_min() {
    let s = load("social_min.json");
    let link: SocialLink = serde_json::from_str(&s).unwrap();
    assert_eq!(link.label, "GitHub");
    assert_eq!(link.link, "https://github.com/someone");
    assert!(!link.show_header);
    link.validate().unwrap();
}

#[test]
fn parse_social_full() {
    let s = load("social_full.json");
    let link: SocialLink = serde_json::from_str(&s).unwrap();
    assert_eq!(link.label, "Email");
    assert!(link.show_header);
    link.validate().unwrap();
}

#[test]
fn reject_unknown_fields() {
    let s = r#"{"label":"X","link":"https://x.com","header":true}"#;
    let err = serde_json::from_str::<SocialLink>(s).expect_err("must fail");
    assert!(err.to_string().contains("header"));
}

#[test]
fn reject_unsupported_scheme() {
    let link = SocialLink {
        label: "FTP".into(),
        link: "ftp://files.example.com".into(),
        show_header: false,
    };
    let err = link.validate().expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
