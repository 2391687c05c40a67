use url::Url;

use crate::error::ScrapeError;

/// Where an image comes from and what it is saved as.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    pub url: Url,
    pub file_name: String,
}

impl DownloadTarget {
    /// Names the file after the player encoded in the image's own name:
    /// `.../Adams_Steven_nba.jpg` becomes `Steven-Adams.jpg`. The name is
    /// read from `src` as written in the page, not from the escaped `url`.
    pub fn from_src(url: Url, src: &str) -> Result<Self, ScrapeError> {
        let file_name = player_file_name(last_segment(src))
            .ok_or_else(|| ScrapeError::BadImageName(src.to_string()))?;

        Ok(Self { url, file_name })
    }
}

/// Final `/` segment of `src`, without any query or fragment.
fn last_segment(src: &str) -> &str {
    let path = src.split(|c| c == '?' || c == '#').next().unwrap_or_default();

    path.rsplit('/').next().unwrap_or_default()
}

/// `{second}-{first}.jpg` from the `_`-separated tokens of `segment`.
pub fn player_file_name(segment: &str) -> Option<String> {
    let mut tokens = segment.split('_');

    let first = tokens.next().filter(|t| !t.is_empty())?;
    let second = tokens.next().filter(|t| !t.is_empty())?;

    Some(format!("{}-{}.jpg", second, first))
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{player_file_name, DownloadTarget};
    use crate::error::ScrapeError;

    #[test]
    fn swaps_last_and_first_name() {
        assert_eq!(
            player_file_name("LASTNAME_FIRSTNAME_xyz.jpg").as_deref(),
            Some("FIRSTNAME-LASTNAME.jpg")
        );
    }

    #[test]
    fn only_two_tokens_keeps_extension_in_second() {
        assert_eq!(
            player_file_name("Adams_Steven.jpg").as_deref(),
            Some("Steven.jpg-Adams.jpg")
        );
    }

    #[test]
    fn single_token_has_no_name() {
        assert_eq!(player_file_name("portrait.jpg"), None);
        assert_eq!(player_file_name("_Steven_x.jpg"), None);
        assert_eq!(player_file_name(""), None);
    }

    #[test]
    fn target_uses_last_path_segment() {
        let src = "/images/nba/4.2/profiles/photos/2006/Adebayo_Bam_nba.jpg?v=2";
        let url = Url::parse("https://basketball.realgm.com")
            .unwrap()
            .join(src)
            .unwrap();

        let target = DownloadTarget::from_src(url.clone(), src).unwrap();

        assert_eq!(target.file_name, "Bam-Adebayo.jpg");
        assert_eq!(target.url, url);
    }

    #[test]
    fn name_is_taken_unescaped_from_src() {
        let origin = Url::parse("https://basketball.realgm.com").unwrap();

        for (src, expected) in [
            ("/images/Dončić_Luka_nba.jpg", "Luka-Dončić.jpg"),
            ("/images/Jaquez Jr_Jaime_nba.jpg#top", "Jaime-Jaquez Jr.jpg"),
        ] {
            let url = origin.join(src).unwrap();
            let target = DownloadTarget::from_src(url, src).unwrap();

            assert_eq!(target.file_name, expected);
        }
    }

    #[test]
    fn bad_segment_is_reported() {
        let url = Url::parse("https://basketball.realgm.com/images/nophoto.png").unwrap();

        assert!(matches!(
            DownloadTarget::from_src(url, "/images/nophoto.png"),
            Err(ScrapeError::BadImageName(src)) if src == "/images/nophoto.png"
        ));
    }
}
