//! Technology category tags.
//!
//! The slugs follow the Wappalyzer category catalogue. Decoding is closed:
//! a slug outside this list is a schema mismatch, not a new category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown category slug
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {slug}")]
pub struct CategoryError {
    /// The slug that did not match
    pub slug: String,
}

macro_rules! categories {
    ($($(#[$doc:meta])* $variant:ident => $slug:literal,)+) => {
        /// A technology category
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Category {
            $(
                $(#[$doc])*
                #[doc = concat!("Slug `", $slug, "`")]
                #[serde(rename = $slug)]
                $variant,
            )+
        }

        impl Category {
            /// Every known category, in catalogue order
            pub const ALL: &'static [Category] = &[$(Category::$variant,)+];

            /// Wire slug for this category
            #[must_use]
            pub const fn slug(&self) -> &'static str {
                match self {
                    $(Self::$variant => $slug,)+
                }
            }
        }

        impl FromStr for Category {
            type Err = CategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($slug => Ok(Self::$variant),)+
                    _ => Err(CategoryError { slug: s.to_string() }),
                }
            }
        }
    };
}

categories! {
    /// Content management systems
    Cms => "cms",
    MessageBoards => "message-boards",
    DatabaseManagers => "database-managers",
    DocumentationTools => "documentation-tools",
    Widgets => "widgets",
    WebShops => "web-shops",
    PhotoGalleries => "photo-galleries",
    Wikis => "wikis",
    HostingPanels => "hosting-panels",
    Analytics => "analytics",
    Blogs => "blogs",
    JavascriptFrameworks => "javascript-frameworks",
    IssueTrackers => "issue-trackers",
    VideoPlayers => "video-players",
    CommentSystems => "comment-systems",
    Captchas => "captchas",
    FontScripts => "font-scripts",
    WebFrameworks => "web-frameworks",
    Miscellaneous => "miscellaneous",
    Editors => "editors",
    /// Learning management systems
    Lms => "lms",
    WebServers => "web-servers",
    CacheTools => "cache-tools",
    RichTextEditors => "rich-text-editors",
    JavascriptGraphics => "javascript-graphics",
    MobileFrameworks => "mobile-frameworks",
    ProgrammingLanguages => "programming-languages",
    OperatingSystems => "operating-systems",
    SearchEngines => "search-engines",
    WebMail => "web-mail",
    /// Content delivery networks
    Cdn => "cdn",
    MarketingAutomation => "marketing-automation",
    WebServerExtensions => "web-server-extensions",
    Databases => "databases",
    Maps => "maps",
    AdvertisingNetworks => "advertising-networks",
    NetworkDevices => "network-devices",
    MediaServers => "media-servers",
    Webcams => "webcams",
    Printers => "printers",
    PaymentProcessors => "payment-processors",
    TagManagers => "tag-managers",
    Paywalls => "paywalls",
    BuildCiSystems => "build-ci-systems",
    ControlSystems => "control-systems",
    RemoteAccess => "remote-access",
    DevTools => "dev-tools",
    NetworkStorage => "network-storage",
    FeedReaders => "feed-readers",
    DocumentManagementSystems => "document-management-systems",
    LandingPageBuilders => "landing-page-builders",
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
