// ABOUTME: Console endpoint paths, form field names, and response markers.
// ABOUTME: All paths are relative to the configured console prefix.

pub const LOGIN: &str = "/login.jsp";
pub const PACKAGE_LIST: &str = "/packmgr/list.jsp";
pub const PACKAGE_UNPACK: &str = "/packmgr/unpack.jsp";
pub const PACKAGE_SERVICE: &str = "/packmgr/service.jsp";
pub const DELETE_RECURSIVE: &str = "/browser/delete_recursive.jsp";
pub const NODE_DEFINITION: &str = "/browser/definition.jsp";
pub const NODE_CONTENT: &str = "/browser/content.jsp";

/// Multipart field carrying the uploaded package.
pub const UPLOAD_FIELD: &str = "file";

/// Text the unpack page contains when the install succeeded.
pub const INSTALL_SUCCESS_MARKER: &str = "Package installed in";

/// Mixin reported by the definition page for version-controlled nodes (lower case).
pub const VERSIONABLE_MARKER: &str = "mix:versionable";
