//! Application composition root.
//!
//! [`App`] owns the normalized options, the [`SelectionState`], the
//! [`InstallOrchestrator`] and the renderer. Everything after startup arrives
//! as an [`AppEvent`] through [`App::handle`].

use tracing::debug;

use crate::config::PickConfig;
use crate::install::{Checkpoint, InstallCapability, InstallOrchestrator, InstallOutcome};
use crate::options::{normalize, PickOption};
use crate::selection::SelectionState;
use crate::ui::Renderer;
use crate::worker::{register_worker, WorkerRegistrar};

/// Named events driving the app after startup.
pub enum AppEvent {
    /// The user picked the option with this id.
    UserSelected(String),
    /// The user asked to confirm the current selection.
    ConfirmRequested,
    /// The platform offered a native install capability.
    CapabilityOffered(Box<dyn InstallCapability>),
    /// The page reached a lifecycle checkpoint.
    LifecycleCheckpoint(Checkpoint),
    /// The user closed the install hint.
    UserDismissed,
    /// The user asked to install through the native capability.
    InstallRequested,
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserSelected(_) => "user_selected",
            Self::ConfirmRequested => "confirm_requested",
            Self::CapabilityOffered(_) => "capability_offered",
            Self::LifecycleCheckpoint(_) => "lifecycle_checkpoint",
            Self::UserDismissed => "user_dismissed",
            Self::InstallRequested => "install_requested",
        }
    }
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State changed; nothing further to report.
    Handled,
    /// The event had no effect.
    Ignored,
    /// The selection was confirmed.
    Confirmed(PickOption),
    /// Hint visibility was recomputed.
    Hint(bool),
    /// An install attempt finished.
    Install(InstallOutcome),
}

/// The running application.
pub struct App<R: Renderer> {
    title: Option<String>,
    selection: SelectionState,
    orchestrator: InstallOrchestrator,
    renderer: R,
    worker: Option<(Box<dyn WorkerRegistrar>, String)>,
}

impl<R: Renderer> App<R> {
    /// Create an app over an already normalized option set.
    pub fn new(options: Vec<PickOption>, orchestrator: InstallOrchestrator, renderer: R) -> Self {
        Self {
            title: None,
            selection: SelectionState::new(options),
            orchestrator,
            renderer,
            worker: None,
        }
    }

    /// Create an app from configuration, normalizing its options.
    pub fn from_config(config: &PickConfig, orchestrator: InstallOrchestrator, renderer: R) -> Self {
        let mut app = Self::new(normalize(&config.options), orchestrator, renderer);
        app.title = config.app_name.clone().filter(|t| !t.is_empty());
        app
    }

    /// Register `script` through `registrar` when the app starts.
    pub fn with_worker(mut self, registrar: Box<dyn WorkerRegistrar>, script: &str) -> Self {
        self.worker = Some((registrar, script.to_string()));
        self
    }

    /// Paint the initial view, register the worker and run the load checkpoint.
    pub fn start(&mut self) -> bool {
        if let Some(title) = &self.title {
            self.renderer.show_header(title);
        }
        self.renderer.render_options(self.selection.options());
        self.renderer.set_confirm_enabled(self.selection.can_confirm());
        self.renderer
            .set_install_enabled(self.orchestrator.has_capability());

        if let Some((registrar, script)) = &self.worker {
            register_worker(registrar.as_ref(), script);
        }

        self.refresh_hint(Checkpoint::Load)
    }

    /// Route one event to the state it concerns and update the view.
    pub async fn handle(&mut self, event: AppEvent) -> EventOutcome {
        debug!("Handling event: {}", event.name());

        match event {
            AppEvent::UserSelected(id) => {
                let accepted = self.selection.select(&id);
                if accepted {
                    self.renderer.reflect_selection(&id);
                }
                self.renderer.set_confirm_enabled(self.selection.can_confirm());
                if accepted {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            AppEvent::ConfirmRequested => match self.selection.confirm() {
                Some(option) => {
                    self.renderer.show_confirmation(&option.confirmation_text());
                    EventOutcome::Confirmed(option)
                }
                None => EventOutcome::Ignored,
            },
            AppEvent::CapabilityOffered(capability) => {
                self.orchestrator.on_capability_offered(capability);
                self.renderer.set_install_enabled(true);
                EventOutcome::Handled
            }
            AppEvent::LifecycleCheckpoint(checkpoint) => {
                EventOutcome::Hint(self.refresh_hint(checkpoint))
            }
            AppEvent::UserDismissed => {
                let visible = self.orchestrator.dismiss();
                self.renderer.set_hint_visible(visible);
                EventOutcome::Hint(visible)
            }
            AppEvent::InstallRequested => {
                self.renderer.set_install_enabled(false);
                let outcome = self.orchestrator.trigger_install().await;
                self.renderer
                    .set_install_enabled(self.orchestrator.has_capability());
                if outcome == InstallOutcome::Accepted {
                    self.refresh_hint(Checkpoint::VisibilityChange);
                }
                EventOutcome::Install(outcome)
            }
        }
    }

    /// The selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The install orchestrator.
    pub fn orchestrator(&self) -> &InstallOrchestrator {
        &self.orchestrator
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer, for prompting.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn refresh_hint(&mut self, checkpoint: Checkpoint) -> bool {
        let visible = self.orchestrator.on_lifecycle_checkpoint(checkpoint);
        self.renderer.set_hint_visible(visible);
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionConfig;
    use crate::install::{EnvPlatform, MemoryDismissalStore, PlatformChoice, ScriptedCapability};
    use crate::ui::MockRenderer;
    use std::cell::RefCell;
    use std::rc::Rc;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64)";

    fn orchestrator(user_agent: &str, store: MemoryDismissalStore) -> InstallOrchestrator {
        let platform = EnvPlatform::with_env(|_| None).with_user_agent(user_agent);
        InstallOrchestrator::new(Box::new(platform), Box::new(store))
    }

    fn app(user_agent: &str) -> App<MockRenderer> {
        let config = PickConfig::builtin();
        App::from_config(
            &config,
            orchestrator(user_agent, MemoryDismissalStore::new()),
            MockRenderer::new(),
        )
    }

    #[test]
    fn start_renders_options_with_confirm_disabled() {
        let mut app = app(DESKTOP_UA);
        assert!(!app.start());

        let renderer = app.renderer();
        let rendered = renderer.rendered_options().unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].percentage + rendered[1].percentage, 100);
        assert!(!renderer.confirm_enabled());
        assert!(!renderer.install_enabled());
        assert!(!renderer.hint_visible());
    }

    #[test]
    fn start_shows_hint_on_handheld_apple() {
        let mut app = app(IPHONE_UA);
        assert!(app.start());
        assert!(app.renderer().hint_visible());
    }

    #[test]
    fn from_config_normalizes_weights() {
        let config = PickConfig {
            options: vec![
                OptionConfig::new("a", "A", 1.0),
                OptionConfig::new("b", "B", 1.0),
                OptionConfig::new("c", "C", 1.0),
            ],
            ..PickConfig::builtin()
        };
        let app = App::from_config(
            &config,
            orchestrator(DESKTOP_UA, MemoryDismissalStore::new()),
            MockRenderer::new(),
        );
        let pcts: Vec<u32> = app
            .selection()
            .options()
            .iter()
            .map(|o| o.percentage)
            .collect();
        assert_eq!(pcts, vec![33, 33, 34]);
    }

    #[tokio::test]
    async fn select_then_confirm_shows_confirmation() {
        let mut app = app(DESKTOP_UA);
        app.start();

        let outcome = app.handle(AppEvent::UserSelected("opt1".into())).await;
        assert_eq!(outcome, EventOutcome::Handled);
        assert!(app.renderer().confirm_enabled());
        assert_eq!(app.renderer().selections(), &["opt1".to_string()]);

        let outcome = app.handle(AppEvent::ConfirmRequested).await;
        match outcome {
            EventOutcome::Confirmed(option) => assert_eq!(option.id, "opt1"),
            other => panic!("expected confirmation, got {:?}", other),
        }
        assert!(app
            .renderer()
            .has_confirmation("You selected: Option 1 (60%)"));
    }

    #[tokio::test]
    async fn unknown_selection_is_ignored() {
        let mut app = app(DESKTOP_UA);
        app.start();

        let outcome = app.handle(AppEvent::UserSelected("nope".into())).await;
        assert_eq!(outcome, EventOutcome::Ignored);
        assert!(app.renderer().selections().is_empty());
        assert!(!app.renderer().confirm_enabled());
        assert_eq!(app.selection().current_selection(), None);
    }

    #[tokio::test]
    async fn confirm_without_selection_is_ignored() {
        let mut app = app(DESKTOP_UA);
        app.start();

        assert_eq!(
            app.handle(AppEvent::ConfirmRequested).await,
            EventOutcome::Ignored
        );
        assert!(app.renderer().confirmations().is_empty());
    }

    #[tokio::test]
    async fn reselection_keeps_confirm_enabled() {
        let mut app = app(DESKTOP_UA);
        app.start();

        app.handle(AppEvent::UserSelected("opt1".into())).await;
        app.handle(AppEvent::UserSelected("opt2".into())).await;
        app.handle(AppEvent::UserSelected("missing".into())).await;

        assert_eq!(app.selection().current_selection(), Some("opt2"));
        assert!(app.renderer().confirm_enabled());
    }

    #[tokio::test]
    async fn install_consumes_capability() {
        let mut app = app(DESKTOP_UA);
        app.start();

        let outcome = app
            .handle(AppEvent::CapabilityOffered(Box::new(
                ScriptedCapability::answering(PlatformChoice::Accepted),
            )))
            .await;
        assert_eq!(outcome, EventOutcome::Handled);
        assert!(app.renderer().install_enabled());

        let outcome = app.handle(AppEvent::InstallRequested).await;
        assert_eq!(outcome, EventOutcome::Install(InstallOutcome::Accepted));
        assert!(!app.renderer().install_enabled());
        assert_eq!(app.renderer().install_states(), &[false, true, false, false]);

        let outcome = app.handle(AppEvent::InstallRequested).await;
        assert_eq!(outcome, EventOutcome::Install(InstallOutcome::Unavailable));
    }

    #[tokio::test]
    async fn install_failure_is_an_outcome() {
        let mut app = app(DESKTOP_UA);
        app.start();
        app.handle(AppEvent::CapabilityOffered(Box::new(
            ScriptedCapability::failing("revoked"),
        )))
        .await;

        let outcome = app.handle(AppEvent::InstallRequested).await;
        assert_eq!(
            outcome,
            EventOutcome::Install(InstallOutcome::Failed("revoked".to_string()))
        );
        assert!(!app.orchestrator().has_capability());
    }

    #[tokio::test]
    async fn dismissal_hides_hint_across_restart() {
        let store = MemoryDismissalStore::new();
        let mut app = App::new(
            Vec::new(),
            orchestrator(IPHONE_UA, store.clone()),
            MockRenderer::new(),
        );
        assert!(app.start());

        assert_eq!(
            app.handle(AppEvent::UserDismissed).await,
            EventOutcome::Hint(false)
        );
        assert!(!app.renderer().hint_visible());

        let mut restarted = App::new(Vec::new(), orchestrator(IPHONE_UA, store), MockRenderer::new());
        assert!(!restarted.start());
        assert_eq!(
            restarted
                .handle(AppEvent::LifecycleCheckpoint(Checkpoint::PageShow))
                .await,
            EventOutcome::Hint(false)
        );
    }

    #[test]
    fn start_registers_worker_once() {
        struct Recording(Rc<RefCell<Vec<String>>>);

        impl WorkerRegistrar for Recording {
            fn register(&self, script: &str) -> anyhow::Result<String> {
                self.0.borrow_mut().push(script.to_string());
                anyhow::bail!("no worker support")
            }
        }

        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut app = app(DESKTOP_UA).with_worker(Box::new(Recording(calls.clone())), "sw.js");
        app.start();

        assert_eq!(*calls.borrow(), vec!["sw.js".to_string()]);
        assert!(app.renderer().rendered_options().is_some());
    }

    #[test]
    fn start_shows_app_name_header() {
        let config = PickConfig {
            app_name: Some("Pick one".to_string()),
            ..PickConfig::builtin()
        };
        let mut app = App::from_config(
            &config,
            orchestrator(DESKTOP_UA, MemoryDismissalStore::new()),
            MockRenderer::new(),
        );
        app.start();
        assert_eq!(app.renderer().headers(), &["Pick one".to_string()]);
    }

    #[test]
    fn start_without_app_name_has_no_header() {
        let mut app = app(DESKTOP_UA);
        app.start();
        assert!(app.renderer().headers().is_empty());
    }
}
