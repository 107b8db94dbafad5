//! Well-known capability names declared by remote sessions.

/// The session exposes local and session web storage.
pub const WEB_STORAGE_ENABLED: &str = "webStorageEnabled";

/// The session can query and toggle its network connection.
pub const BROWSER_CONNECTION_ENABLED: &str = "browserConnectionEnabled";

/// The session's screen can be rotated.
pub const ROTATABLE: &str = "rotatable";

/// The session exposes the HTML5 application cache status.
pub const APPLICATION_CACHE_ENABLED: &str = "applicationCacheEnabled";

/// The session can report and override its physical location.
pub const LOCATION_CONTEXT_ENABLED: &str = "locationContextEnabled";

/// Name of the browser driving the session.
pub const BROWSER_NAME: &str = "browserName";

/// Platform the session runs on.
pub const PLATFORM_NAME: &str = "platformName";
