use std::collections::HashMap;

use rand::thread_rng;

use crate::images::dtos::generate_image_dto::GenerateImageDto;

use super::{form::FormState, prompts::random_prompt, theme::Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    Submit,
    ToggleTheme,
    RandomPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    RenderPlaceholders { count: u32, aspect_ratio: String },
    RequestGeneration(GenerateImageDto),
    FillPrompt(String),
    ApplyTheme(Theme),
}

pub type Handler = fn(&UiEvent, &FormState) -> Vec<Effect>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<UiEvent, Vec<Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher wired with the page's stock handlers.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(UiEvent::Submit, on_submit);
        dispatcher.register(UiEvent::ToggleTheme, on_toggle_theme);
        dispatcher.register(UiEvent::RandomPrompt, on_random_prompt);
        dispatcher
    }

    pub fn register(&mut self, event: UiEvent, handler: Handler) {
        self.handlers.entry(event).or_default().push(handler);
    }

    /// Effects of every handler for `event`, in registration order.
    pub fn dispatch(&self, event: UiEvent, form: &FormState) -> Vec<Effect> {
        match self.handlers.get(&event) {
            Some(handlers) => handlers
                .iter()
                .flat_map(|handler| handler(&event, form))
                .collect(),
            None => {
                tracing::debug!(?event, "no handler registered");
                Vec::new()
            }
        }
    }
}

pub fn on_submit(_event: &UiEvent, form: &FormState) -> Vec<Effect> {
    match form.to_request() {
        Ok(request) => vec![
            Effect::RenderPlaceholders {
                count: request.count,
                aspect_ratio: form.aspect_ratio().to_string(),
            },
            Effect::RequestGeneration(request),
        ],
        Err(e) => vec![Effect::Alert(e.to_string())],
    }
}

pub fn on_toggle_theme(_event: &UiEvent, form: &FormState) -> Vec<Effect> {
    vec![Effect::ApplyTheme(form.theme.toggled())]
}

pub fn on_random_prompt(_event: &UiEvent, _form: &FormState) -> Vec<Effect> {
    vec![Effect::FillPrompt(
        random_prompt(&mut thread_rng()).to_string(),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::prompts::EXAMPLE_PROMPTS;

    fn form(prompt: &str) -> FormState {
        FormState {
            model: "stabilityai/stable-diffusion-xl-base-1.0".to_string(),
            count: "3".to_string(),
            ratio: "1/1".to_string(),
            prompt: prompt.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_prompt_only_alerts() {
        let effects = Dispatcher::with_default_handlers().dispatch(UiEvent::Submit, &form(""));

        assert_eq!(
            effects,
            vec![Effect::Alert(
                "Please enter a prompt to generate images.".to_string()
            )]
        );
    }

    #[test]
    fn submit_renders_placeholders_before_requesting() {
        let effects =
            Dispatcher::with_default_handlers().dispatch(UiEvent::Submit, &form("a red fox"));

        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::RenderPlaceholders {
                count: 3,
                aspect_ratio: "1/1".to_string()
            }
        );
        let Effect::RequestGeneration(request) = &effects[1] else {
            panic!("expected a generation request, got {:?}", effects[1]);
        };
        assert_eq!((request.width, request.height, request.count), (512, 512, 3));
    }

    #[test]
    fn invalid_ratio_alerts() {
        let mut form = form("a red fox");
        form.ratio = "wide".to_string();

        let effects = Dispatcher::with_default_handlers().dispatch(UiEvent::Submit, &form);
        assert!(matches!(&effects[..], [Effect::Alert(_)]));
    }

    #[test]
    fn toggle_and_random_prompt() {
        let dispatcher = Dispatcher::with_default_handlers();

        assert_eq!(
            dispatcher.dispatch(UiEvent::ToggleTheme, &form("")),
            vec![Effect::ApplyTheme(Theme::Dark)]
        );

        let effects = dispatcher.dispatch(UiEvent::RandomPrompt, &form(""));
        let [Effect::FillPrompt(prompt)] = &effects[..] else {
            panic!("expected one prompt, got {:?}", effects);
        };
        assert!(EXAMPLE_PROMPTS.contains(&prompt.as_str()));
    }

    #[test]
    fn unregistered_events_do_nothing() {
        assert!(Dispatcher::new()
            .dispatch(UiEvent::Submit, &form("x"))
            .is_empty());
    }
}
