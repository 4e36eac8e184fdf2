use crate::{app::util::time, images::util::data_uri};

pub const LOADING_TEXT: &str = "Generating...";
pub const ERROR_TEXT: &str = "Generation failed! Check console for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCardState {
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    pub index: usize,
    pub aspect_ratio: String,
    pub state: ImageCardState,
    pub status_text: String,
    pub src: Option<String>,
    pub download_name: Option<String>,
}

impl ImageCard {
    fn loading(index: usize, aspect_ratio: &str) -> Self {
        Self {
            index,
            aspect_ratio: aspect_ratio.to_string(),
            state: ImageCardState::Loading,
            status_text: LOADING_TEXT.to_string(),
            src: None,
            download_name: None,
        }
    }

    /// Element id the page uses for this card.
    pub fn element_id(&self) -> String {
        format!("img-card-{}", self.index)
    }
}

/// Cards for the current batch plus the generate button's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    pub cards: Vec<ImageCard>,
    pub generating: bool,
}

impl Gallery {
    /// Drops the previous batch and lays out `count` loading placeholders.
    pub fn begin(&mut self, count: u32, aspect_ratio: &str) {
        self.cards = (0..count as usize)
            .map(|index| ImageCard::loading(index, aspect_ratio))
            .collect();
        self.generating = true;
    }

    pub fn resolve(&mut self, images: &[String]) {
        for (index, image) in images.iter().enumerate() {
            let Some(card) = self.cards.get_mut(index) else {
                tracing::warn!(index, "received more images than cards");
                break;
            };

            card.state = ImageCardState::Loaded;
            card.status_text.clear();
            card.src = Some(data_uri::normalize(image));
            card.download_name = Some(format!("{}.png", time::current_time_in_millis()));
        }

        self.generating = false;
    }

    /// Marks every card still loading as failed.
    pub fn fail(&mut self) {
        for card in self
            .cards
            .iter_mut()
            .filter(|card| card.state == ImageCardState::Loading)
        {
            card.state = ImageCardState::Error;
            card.status_text = ERROR_TEXT.to_string();
        }

        self.generating = false;
    }
}
