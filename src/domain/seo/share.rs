// src/domain/seo/share.rs
use crate::domain::content::ContentRecord;
use crate::domain::seo::metadata::{display_title, share_image};
use crate::domain::seo::site::SiteSettings;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub whatsapp: String,
    pub reddit: String,
    pub pinterest: String,
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn share_links(record: &ContentRecord, site: &SiteSettings) -> ShareLinks {
    let url = encode_component(&site.content_url(record.kind, &record.slug));
    let title = encode_component(&display_title(record, site));

    let mut pinterest =
        format!("https://pinterest.com/pin/create/button/?url={url}&description={title}");
    if let Some(image) = share_image(record, site) {
        pinterest.push_str("&media=");
        pinterest.push_str(&encode_component(&image.url));
    }

    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
        whatsapp: format!("https://wa.me/?text={title}%20{url}"),
        reddit: format!("https://www.reddit.com/submit?url={url}&title={title}"),
        pinterest,
    }
}
