//! NNTP status codes the decoder treats specially (RFC 3977).

/// Help text follows
pub const HELP_TEXT_FOLLOWS: u16 = 100;
/// Capability list follows
pub const CAPABILITY_LIST: u16 = 101;
/// Group selected (GROUP) or article numbers follow (LISTGROUP)
pub const GROUP_SELECTED: u16 = 211;
/// Information follows (LIST variants)
pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
/// Article follows
pub const ARTICLE_FOLLOWS: u16 = 220;
/// Headers of the article follow
pub const HEAD_FOLLOWS: u16 = 221;
/// Body of the article follows
pub const BODY_FOLLOWS: u16 = 222;
/// Overview information follows
pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
/// Header field data follows (HDR)
pub const HEADERS_FOLLOW: u16 = 225;
/// List of new articles follows
pub const NEW_ARTICLE_LIST_FOLLOWS: u16 = 230;
/// List of new newsgroups follows
pub const NEW_NEWSGROUPS_FOLLOW: u16 = 231;

/// Codes that are always followed by a dot-terminated block. Kept sorted.
pub const MULTILINE_CODES: [u16; 10] = [
    HELP_TEXT_FOLLOWS,
    CAPABILITY_LIST,
    LIST_INFORMATION_FOLLOWS,
    ARTICLE_FOLLOWS,
    HEAD_FOLLOWS,
    BODY_FOLLOWS,
    OVERVIEW_INFO_FOLLOWS,
    HEADERS_FOLLOW,
    NEW_ARTICLE_LIST_FOLLOWS,
    NEW_NEWSGROUPS_FOLLOW,
];

/// Codes whose block starts with an article header section.
pub const HEADER_CODES: [u16; 2] = [ARTICLE_FOLLOWS, HEAD_FOLLOWS];

#[inline]
pub fn has_header_block(status: u16) -> bool {
    HEADER_CODES.contains(&status)
}
