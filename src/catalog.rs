//! Static video catalog for the landing page.
//!
//! The catalog is compiled into the binary and never mutated. Thumbnail and
//! player references are opaque URLs pointing at external services; nothing
//! here parses or fetches them.

/// One selectable lesson in the course library.
#[derive(Debug, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub module: &'static str,
    pub duration: &'static str,
    pub thumbnail: &'static str,
    pub video_url: &'static str,
}

const COMMON_THUMBNAIL: &str = "https://i.ytimg.com/vi/S3I_8y_P5W0/maxresdefault.jpg";
const VIMEO_PLAYER_URL: &str = "https://player.vimeo.com/video/1066763132";

pub const VIDEO_LIBRARY: &[VideoRecord] = &[
    VideoRecord {
        id: "c7-vimeo-01",
        title: "A Nova Era do Trading Esportivo: Masterclass C7",
        module: "Masterclass Especial",
        duration: "45:00",
        thumbnail: COMMON_THUMBNAIL,
        video_url: VIMEO_PLAYER_URL,
    },
    VideoRecord {
        id: "master-01",
        title: "A Matemática do Valor Esperado (+EV) no Futebol",
        module: "Módulo Profissional",
        duration: "18:12",
        thumbnail: COMMON_THUMBNAIL,
        video_url: VIMEO_PLAYER_URL,
    },
    VideoRecord {
        id: "1",
        title: "Estratégia de Scalping em Mercados de Alta Liquidez",
        module: "Live Trading",
        duration: "12:45",
        thumbnail: COMMON_THUMBNAIL,
        video_url: VIMEO_PLAYER_URL,
    },
    VideoRecord {
        id: "2",
        title: "Gestão de Stake Dinâmica: Protegendo sua Banca",
        module: "Psicologia e Gestão",
        duration: "08:20",
        thumbnail: COMMON_THUMBNAIL,
        video_url: VIMEO_PLAYER_URL,
    },
];

/// The record every playback surface targets until the user picks another.
pub fn default_video() -> &'static VideoRecord {
    &VIDEO_LIBRARY[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_non_empty() {
        assert!(!VIDEO_LIBRARY.is_empty());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = VIDEO_LIBRARY.iter().map(|video| video.id).collect();
        assert_eq!(ids.len(), VIDEO_LIBRARY.len());
    }

    #[test]
    fn default_video_is_first_entry() {
        assert_eq!(default_video(), &VIDEO_LIBRARY[0]);
    }
}
