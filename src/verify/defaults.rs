//! Known placeholder values shipped in example configuration

/// Literal values that mean a setting was never changed
pub const DEFAULT_VALUES: &[&str] = &[
    "your_super_secure_jwt_secret_key_here",
    "your_super_secure_session_secret_key_here",
    "your_super_secure_nextauth_secret_key_here",
    "your_super_secure_internal_webhook_secret",
    "secure_postgres_password_change_this",
    "postgres123",
    "your_yookassa_shop_id",
    "your_yookassa_secret_key",
    "your_yookassa_webhook_secret",
    "your_email@gmail.com",
    "your_app_password",
    "courseplatform.com",
    "localhost",
    "G-XXXXXXXXXX",
    "123456789012345",
    "abcdefghij",
    "admin@courseplatform.com",
    "noreply@courseplatform.com",
];

/// Keys that must not keep a default or empty value in production
pub const CRITICAL_KEYS: &[&str] = &[
    "POSTGRES_PASSWORD",
    "JWT_SECRET",
    "SESSION_SECRET",
    "NEXTAUTH_SECRET",
    "YOOKASSA_SHOP_ID",
    "YOOKASSA_SECRET_KEY",
    "DOMAIN",
    "NEXTAUTH_URL",
    "SMTP_USER",
    "SMTP_PASS",
];

/// Domains that should not appear in a `server_name` directive
pub const DEFAULT_DOMAINS: &[&str] = &["localhost", "courseplatform.local", "example.com"];

/// Database password shipped in the compose examples
pub const DEFAULT_COMPOSE_PASSWORD: &str = "postgres123";

/// Values treated as empty besides the empty string
pub const EMPTY_LITERALS: &[&str] = &["\"\"", "''"];
