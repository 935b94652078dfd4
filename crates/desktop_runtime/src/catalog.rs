//! The static portfolio catalog and site-wide content constants.
//!
//! Records are created once at process start and never mutated. Catalog order
//! matters: it drives window stacking (later entries draw above earlier ones).

use crate::model::{FolderContent, FolderId, FolderRecord, PointerPosition};

/// DOM id of the hidden audio element backing the music panel.
pub const AUDIO_ELEMENT_ID: &str = "workspace-audio-channel";
/// Looping track played by the music panel.
pub const AUDIO_TRACK_SRC: &str = "/audio/pranav-theme.mp3";
/// Photo wallpaper behind the desktop.
pub const DESKTOP_WALLPAPER: &str = "/images/shivpranav.jpg";
/// Number shown in the chat contact popup.
pub const CONTACT_PHONE: &str = "+91-80086 36217";
/// Outbound profile link on the taskbar.
pub const PROFILE_URL: &str = "https://www.instagram.com/usernamepranav/";

/// Search suggestions offered on the hero screen.
pub static HERO_SUGGESTIONS: &[&str] = &[
    "theatre shots",
    "green screen takes",
    "candid / just like that",
    "showreel",
];

static BHOOTAGAANAM_IMAGES: &[&str] = &[
    "/images/bhootaganam/1.jpg",
    "/images/bhootaganam/2.jpg",
    "/images/bhootaganam/3.jpg",
    "/images/bhootaganam/4.jpg",
    "/images/bhootaganam/5.jpg",
    "/images/bhootaganam/6.jpg",
    "/images/bhootaganam/7.jpg",
    "/images/bhootaganam/8.jpg",
    "/images/bhootaganam/9.jpg",
    "/images/bhootaganam/10.jpg",
    "/images/bhootaganam/11.jpg",
];

static BKB_IMAGES: &[&str] = &[
    "/images/bkb/1.jpg",
    "/images/bkb/2.jpg",
    "/images/bkb/3.jpg",
    "/images/bkb/4.jpg",
    "/images/bkb/5.jpg",
    "/images/bkb/6.jpg",
    "/images/bkb/7.jpg",
];

static GREEN_SCREEN_IMAGES: &[&str] = &[
    "/images/green/1.jpg",
    "/images/green/2.jpg",
    "/images/green/3.jpg",
    "/images/green/4.jpg",
    "/images/green/5.jpg",
    "/images/green/6.jpg",
    "/images/green/7.jpg",
    "/images/green/8.jpg",
    "/images/green/9.jpg",
];

static JUST_LIKE_THAT_IMAGES: &[&str] = &[
    "/images/just/1.jpg",
    "/images/just/2.jpg",
    "/images/just/3.jpg",
    "/images/just/4.jpg",
    "/images/just/5.jpg",
    "/images/just/6.jpg",
    "/images/just/7.jpg",
    "/images/just/8.jpg",
];

const ABOUT_ME_TEXT: &str = "I'm Shiva Pranav, an actor who found his way back to life through theatre. At a time when everything felt dim, the stage was a ray of sunshine, I still remember deciding, during one ordinary sunset, that this is what I'm going to do. Since then, the actor in me hasn't gone quiet, and it won't. I love becoming someone else, not for show, but to see how deeply I can blend into a character; big role, small role, it doesn't matter. I believe I have it in me to do whatever it takes. You'll know the rest when we work together.";

/// The ordered folder catalog.
pub static FOLDERS: &[FolderRecord] = &[
    FolderRecord {
        id: FolderId("bhootagaanam"),
        title: "Bhootagaanam [Theatre]",
        placement: PointerPosition { x: 120, y: 70 },
        icon: None,
        content: FolderContent::resolve(None, None, BHOOTAGAANAM_IMAGES),
    },
    FolderRecord {
        id: FolderId("bhaag-kodaka"),
        title: "Bhaag Kodaka Bhaag [Theatre]",
        placement: PointerPosition { x: 120, y: 190 },
        icon: None,
        content: FolderContent::resolve(None, None, BKB_IMAGES),
    },
    FolderRecord {
        id: FolderId("green-screen"),
        title: "Green Screen",
        placement: PointerPosition { x: 120, y: 310 },
        icon: None,
        content: FolderContent::resolve(None, None, GREEN_SCREEN_IMAGES),
    },
    FolderRecord {
        id: FolderId("just-like-that"),
        title: "Just Like That",
        placement: PointerPosition { x: 330, y: 90 },
        icon: None,
        content: FolderContent::resolve(None, None, JUST_LIKE_THAT_IMAGES),
    },
    FolderRecord {
        id: FolderId("about-me"),
        title: "About Me",
        placement: PointerPosition { x: 520, y: 110 },
        icon: Some("/images/about.jpg"),
        content: FolderContent::resolve(None, Some(ABOUT_ME_TEXT), &[]),
    },
    FolderRecord {
        id: FolderId("showreel"),
        title: "Showreel",
        placement: PointerPosition { x: 520, y: 220 },
        icon: Some("/images/showr.jpg"),
        content: FolderContent::resolve(Some("/videos/showreel.mp4"), None, &[]),
    },
];

/// Looks a record up by id.
pub fn folder(id: FolderId) -> Option<&'static FolderRecord> {
    FOLDERS.iter().find(|record| record.id == id)
}

/// Looks a record up by raw slug (boot links arrive as strings).
pub fn folder_by_slug(slug: &str) -> Option<&'static FolderRecord> {
    FOLDERS.iter().find(|record| record.id.as_str() == slug)
}

/// Position of a record in catalog order; drives window stacking.
pub fn position_of(id: FolderId) -> Option<usize> {
    FOLDERS.iter().position(|record| record.id == id)
}

/// All catalog ids in order.
pub fn folder_ids() -> Vec<FolderId> {
    FOLDERS.iter().map(|record| record.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (index, record) in FOLDERS.iter().enumerate() {
            assert_eq!(
                position_of(record.id),
                Some(index),
                "duplicate catalog id {}",
                record.id
            );
        }
    }

    #[test]
    fn content_resolution_prefers_video_then_text_then_images() {
        let video = FolderContent::resolve(Some("/v.mp4"), Some("text"), &["/a.jpg"]);
        assert_eq!(video, FolderContent::Video("/v.mp4"));

        let text = FolderContent::resolve(None, Some("text"), &["/a.jpg"]);
        assert_eq!(text, FolderContent::Text("text"));

        let images: &'static [&'static str] = &["/a.jpg"];
        assert_eq!(
            FolderContent::resolve(None, None, images),
            FolderContent::Slideshow(images)
        );

        assert_eq!(FolderContent::resolve(None, None, &[]), FolderContent::Empty);
    }

    #[test]
    fn about_me_is_a_text_folder() {
        let record = folder_by_slug("about-me").expect("about-me in catalog");
        assert!(matches!(record.content, FolderContent::Text(_)));
        assert_eq!(record.content.kind_label(), "Notes");
    }

    #[test]
    fn slideshow_folders_carry_their_first_image_as_thumbnail() {
        let record = folder_by_slug("bhootagaanam").expect("bhootagaanam in catalog");
        assert_eq!(record.thumbnail(), Some("/images/bhootaganam/1.jpg"));

        let explicit = folder_by_slug("showreel").expect("showreel in catalog");
        assert_eq!(explicit.thumbnail(), Some("/images/showr.jpg"));
    }

    #[test]
    fn unknown_slug_resolves_to_nothing() {
        assert!(folder_by_slug("not-a-folder").is_none());
    }
}
