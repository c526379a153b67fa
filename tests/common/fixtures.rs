//! Reusable test content.
//!
//! Token and integrity values are the SHA-256 of the content shown.

/// `img/logo.png`: not valid UTF-8, so never scanned
pub const LOGO_PNG: &[u8] = b"\x89PNG fake logo";
pub const LOGO_TARGET: &str = "img/logo-3c0562c6.png";
pub const LOGO_SRI: &str = "sha256-PAVixqcdW0nIMEB+3BraoMOnIwQD38et6tLGgKZ4qy4=";

/// `css/app.css`, referencing the logo from the root
pub const APP_CSS: &str = "body{background:url(img/logo.png)}";
pub const APP_CSS_REWRITTEN: &str = "body{background:url(img/logo-3c0562c6.png)}";
pub const APP_CSS_TARGET: &str = "css/app-d12097b3.css";
pub const APP_CSS_SRI: &str = "sha256-0SCXs7+eZgARR4LpmTgOcmVoiGyOc/feGsgx5/jT/I4=";

/// `js/app.js`, no references
pub const APP_JS: &str = r#"console.log("hi")"#;
pub const APP_JS_TARGET: &str = "js/app-4cc1666b.js";
pub const APP_JS_SRI: &str = "sha256-TMFma7PHrBUjZEUKY/MwBLuX3/HrQe2+A1FmjMS7ppA=";
