/// Kind classification based on detected MIME types.
///
/// Office and archive families are matched against fixed MIME tables because
/// their types share no useful prefix (`application/...`). Every other kind
/// keyword is compared against the major type, the part before the `/`.
use std::fmt;

/// Word processor documents: `.doc`, `.docx`, `.odt`.
pub const DOC_MIME_TYPES: &[&str] = &[
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.oasis.opendocument.text",
];

/// Spreadsheets: `.xls`, `.xlsx`, `.ods`.
pub const XLS_MIME_TYPES: &[&str] = &[
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.oasis.opendocument.spreadsheet",
];

/// Presentations: `.ppt`, `.pptx`, `.odp`.
pub const PPT_MIME_TYPES: &[&str] = &[
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.oasis.opendocument.presentation",
];

/// Archives and compressed streams.
///
/// `application/vnd.rar` and `application/x-lzip` are the names current
/// sniffers report for RAR and lzip; the older spellings are kept too.
pub const ZIP_MIME_TYPES: &[&str] = &[
    "application/zip",
    "application/x-tar",
    "application/x-bzip2",
    "application/gzip",
    "application/x-7z-compressed",
    "application/x-rar-compressed",
    "application/vnd.rar",
    "application/x-xz",
    "application/x-lzma",
    "application/x-lzip",
    "application/x-compress",
];

/// How a rule decides whether a MIME type belongs to its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeMatch {
    /// The MIME type must be one of these, compared exactly.
    OneOf(&'static [&'static str]),
    /// The major type (before `/`) must equal this value.
    Prefix(&'static str),
}

/// A keyword and the matching strategy it stands for.
#[derive(Debug, PartialEq, Eq)]
pub struct KindRule {
    pub keyword: &'static str,
    pub matcher: MimeMatch,
}

impl KindRule {
    pub fn matches(&self, mime: &str) -> bool {
        match self.matcher {
            MimeMatch::OneOf(types) => types.contains(&mime),
            MimeMatch::Prefix(major) => major_type(mime) == major,
        }
    }
}

/// The built-in kinds. Keywords not listed here still work as a plain
/// major-type match, see [`Kind::Other`].
pub static KIND_RULES: &[KindRule] = &[
    KindRule {
        keyword: "doc",
        matcher: MimeMatch::OneOf(DOC_MIME_TYPES),
    },
    KindRule {
        keyword: "xls",
        matcher: MimeMatch::OneOf(XLS_MIME_TYPES),
    },
    KindRule {
        keyword: "ppt",
        matcher: MimeMatch::OneOf(PPT_MIME_TYPES),
    },
    KindRule {
        keyword: "zip",
        matcher: MimeMatch::OneOf(ZIP_MIME_TYPES),
    },
    KindRule {
        keyword: "image",
        matcher: MimeMatch::Prefix("image"),
    },
    KindRule {
        keyword: "audio",
        matcher: MimeMatch::Prefix("audio"),
    },
    KindRule {
        keyword: "video",
        matcher: MimeMatch::Prefix("video"),
    },
    KindRule {
        keyword: "text",
        matcher: MimeMatch::Prefix("text"),
    },
];

/// Look up a built-in rule by its (already lowercased) keyword.
pub fn rule_for(keyword: &str) -> Option<&'static KindRule> {
    KIND_RULES.iter().find(|rule| rule.keyword == keyword)
}

/// A requested kind filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// One of the [`KIND_RULES`].
    Known(&'static KindRule),
    /// Any other keyword, matched against the MIME major type.
    Other(String),
}

impl Kind {
    /// Parse a user-supplied keyword. Case-insensitive; never fails.
    pub fn parse(keyword: &str) -> Self {
        let lower = keyword.to_lowercase();
        match rule_for(&lower) {
            Some(rule) => Self::Known(rule),
            None => Self::Other(lower),
        }
    }

    /// The normalised keyword.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Known(rule) => rule.keyword,
            Self::Other(keyword) => keyword,
        }
    }

    /// Whether `mime` belongs to this kind.
    ///
    /// The MIME string is compared as-is. Detectors emit lowercase types, so
    /// `IMAGE/PNG` deliberately does not match `image`.
    pub fn matches(&self, mime: &str) -> bool {
        match self {
            Self::Known(rule) => rule.matches(mime),
            Self::Other(keyword) => major_type(mime) == keyword,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn major_type(mime: &str) -> &str {
    mime.split_once('/').map_or(mime, |(major, _)| major)
}
