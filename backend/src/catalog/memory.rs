use super::SourceCatalog;
use crate::errors::Result;
use common::model::source::Source;

/// An immutable in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    sources: Vec<Source>,
}

impl MemoryCatalog {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }
}

impl SourceCatalog for MemoryCatalog {
    fn list_all(&self) -> Result<Vec<Source>> {
        Ok(self.sources.clone())
    }

    fn list_by_video_flag(&self, flag: bool) -> Result<Vec<Source>> {
        Ok(self
            .sources
            .iter()
            .filter(|s| s.is_video == flag)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(id: i64, is_video: bool) -> Source {
        Source {
            id,
            link: format!("yt{id}"),
            title: None,
            artist: None,
            is_video,
        }
    }

    #[test]
    fn filters_on_video_flag() {
        let catalog = MemoryCatalog::new(vec![source(1, false), source(2, true), source(3, true)]);

        assert_eq!(catalog.list_all().unwrap().len(), 3);

        let videos = catalog.list_by_video_flag(true).unwrap();
        assert_eq!(videos.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 3]);

        let audio_only = catalog.list_by_video_flag(false).unwrap();
        assert_eq!(audio_only.len(), 1);
        assert_eq!(audio_only[0].link, "yt1");
    }
}
