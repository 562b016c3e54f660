/// Middleware modules for the web server
///
/// - Security headers

pub mod security;
