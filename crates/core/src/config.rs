//! Configuration constants for typeface conversion.

/// Units per em of every converted font.
pub const RESOLUTION: u16 = 1000;

/// Value of `original_font_information.format` in emitted data.
pub const ORIGINAL_FORMAT: u8 = 0;

/// Opening of the JavaScript wrapper: registers a loader if the page has none.
pub const LOADER_PRELUDE: &str = "if (typeof _typeface_js === 'undefined' || typeof _typeface_js.loadFace !== 'function') {\n  var _typeface_js = { faces: _typeface_js.faces, loadFace: function(typefaceData) { this.faces.push(typefaceData); } };\n}\n\n";

/// Loader call wrapping the JSON payload.
pub const LOADER_CALL: &str = "_typeface_js.loadFace(";

/// Closing of the loader call.
pub const LOADER_EPILOGUE: &str = ");";

/// File extension for JSON output.
pub const JSON_EXTENSION: &str = "json";

/// File extension for JavaScript output.
pub const JAVASCRIPT_EXTENSION: &str = "js";
