use super::{
    cards::Gallery,
    dispatch::{Dispatcher, Effect, UiEvent},
    form::FormState,
    proxy_client::ProxyClient,
    theme::{initial_theme, persist_theme, ThemeStore},
};

/// One open page: form values, cards, alerts raised so far, and the
/// collaborators effects are applied against.
pub struct Session<S: ThemeStore> {
    pub form: FormState,
    pub gallery: Gallery,
    pub alerts: Vec<String>,
    dispatcher: Dispatcher,
    proxy: ProxyClient,
    store: S,
}

impl<S: ThemeStore> Session<S> {
    pub fn new(proxy: ProxyClient, store: S, system_prefers_dark: bool) -> Self {
        let form = FormState {
            theme: initial_theme(&store, system_prefers_dark),
            ..Default::default()
        };

        Self {
            form,
            gallery: Gallery::default(),
            alerts: Vec::new(),
            dispatcher: Dispatcher::with_default_handlers(),
            proxy,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn handle(&mut self, event: UiEvent) {
        let effects = self.dispatcher.dispatch(event, &self.form);

        for effect in effects {
            self.apply(effect).await;
        }
    }

    async fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Alert(message) => {
                tracing::warn!(%message, "alert");
                self.alerts.push(message);
            }
            Effect::RenderPlaceholders {
                count,
                aspect_ratio,
            } => self.gallery.begin(count, &aspect_ratio),
            Effect::RequestGeneration(request) => {
                self.gallery.generating = true;

                match self.proxy.generate(&request).await {
                    Ok(result) => self.gallery.resolve(&result.images),
                    Err(e) => {
                        tracing::error!(%e, "image generation failed");
                        self.gallery.fail();
                    }
                }
            }
            Effect::FillPrompt(prompt) => self.form.prompt = prompt,
            Effect::ApplyTheme(theme) => {
                self.form.theme = theme;
                persist_theme(&mut self.store, theme);
            }
        }
    }
}
