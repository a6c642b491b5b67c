use crate::config::{ConfigError, RuntimeConfig};
use crate::state::notifications::Notification;

use super::provider::RenderRequest;
use super::script::{default_sdk_url, ScriptOutcome, ScriptStatus, SDK_SCRIPT_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Unmounted,
    ScriptInjecting,
    ScriptReady,
    ButtonsRendered,
    /// Terminal until the widget is unmounted and mounted again.
    Failed,
}

impl WidgetState {
    pub fn is_busy(self) -> bool {
        matches!(self, WidgetState::ScriptInjecting | WidgetState::ScriptReady)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Mount { script: ScriptStatus },
    ScriptSettled {
        outcome: ScriptOutcome,
        provider_available: bool,
    },
    Rendered,
    RenderFailed(String),
    Unmount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    InjectScript { id: String, src: String },
    WatchScript { id: String },
    CheckProvider,
    RenderButtons(RenderRequest),
    CloseButtons,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub script_id: String,
    pub sdk_src: Result<String, ConfigError>,
    pub render: RenderRequest,
}

impl WidgetSettings {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            script_id: SDK_SCRIPT_ID.to_string(),
            sdk_src: config.client_id().map(|id| default_sdk_url(&id)),
            render: RenderRequest::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: WidgetState,
    pub commands: Vec<WidgetCommand>,
    pub notifications: Vec<Notification>,
}

impl Step {
    fn stay(state: WidgetState) -> Self {
        Self::to(state)
    }

    fn to(state: WidgetState) -> Self {
        Self {
            state,
            commands: Vec::new(),
            notifications: Vec::new(),
        }
    }

    fn run(mut self, command: WidgetCommand) -> Self {
        self.commands.push(command);
        self
    }

    fn notify(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }
}

pub fn sdk_load_failed(detail: &str) -> Notification {
    Notification::error("SDK failed to load", detail.to_string())
}

/// Single transition function of the subscription widget. Events that do not
/// apply to the current state leave it unchanged and produce no effects.
pub fn transition(state: WidgetState, event: &WidgetEvent, settings: &WidgetSettings) -> Step {
    use WidgetState::*;

    match (state, event) {
        (Unmounted, WidgetEvent::Mount { script }) => match script {
            ScriptStatus::Loaded => Step::to(ScriptInjecting).run(WidgetCommand::CheckProvider),
            ScriptStatus::Failed => Step::to(Failed).notify(sdk_load_failed(
                "The payment script could not be downloaded.",
            )),
            ScriptStatus::Loading => Step::to(ScriptInjecting).run(WidgetCommand::WatchScript {
                id: settings.script_id.clone(),
            }),
            ScriptStatus::Absent => match &settings.sdk_src {
                Ok(src) => Step::to(ScriptInjecting).run(WidgetCommand::InjectScript {
                    id: settings.script_id.clone(),
                    src: src.clone(),
                }),
                Err(err) => Step::to(Failed).notify(Notification::error(
                    "Payment configuration error",
                    err.to_string(),
                )),
            },
        },
        (
            ScriptInjecting,
            WidgetEvent::ScriptSettled {
                outcome,
                provider_available,
            },
        ) => match (*outcome, *provider_available) {
            (ScriptOutcome::Loaded, true) => {
                Step::to(ScriptReady).run(WidgetCommand::RenderButtons(settings.render.clone()))
            }
            (ScriptOutcome::Loaded, false) => Step::to(Failed).notify(sdk_load_failed(
                "The payment provider did not initialise. Please refresh the page.",
            )),
            (ScriptOutcome::Failed, _) => Step::to(Failed).notify(sdk_load_failed(
                "The payment script could not be downloaded.",
            )),
        },
        (ScriptReady, WidgetEvent::Rendered) => Step::to(ButtonsRendered),
        (ScriptReady, WidgetEvent::RenderFailed(reason)) => Step::to(Failed).notify(
            Notification::error("Payment buttons unavailable", reason.clone()),
        ),
        (ButtonsRendered, WidgetEvent::Unmount) => {
            Step::to(Unmounted).run(WidgetCommand::CloseButtons)
        }
        (ScriptInjecting | ScriptReady | Failed, WidgetEvent::Unmount) => Step::to(Unmounted),
        (current, _) => Step::stay(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notifications::NotificationKind;

    fn settings() -> WidgetSettings {
        WidgetSettings {
            script_id: SDK_SCRIPT_ID.into(),
            sdk_src: Ok("https://sdk.test/js".into()),
            render: RenderRequest::default(),
        }
    }

    fn loaded(provider_available: bool) -> WidgetEvent {
        WidgetEvent::ScriptSettled {
            outcome: ScriptOutcome::Loaded,
            provider_available,
        }
    }

    #[test]
    fn mount_injects_when_script_absent() {
        let step = transition(
            WidgetState::Unmounted,
            &WidgetEvent::Mount {
                script: ScriptStatus::Absent,
            },
            &settings(),
        );
        assert_eq!(step.state, WidgetState::ScriptInjecting);
        assert_eq!(
            step.commands,
            vec![WidgetCommand::InjectScript {
                id: SDK_SCRIPT_ID.into(),
                src: "https://sdk.test/js".into()
            }]
        );
        assert!(step.notifications.is_empty());
    }

    #[test]
    fn mount_never_injects_when_tag_present() {
        for (script, expected) in [
            (ScriptStatus::Loading, WidgetCommand::WatchScript { id: SDK_SCRIPT_ID.into() }),
            (ScriptStatus::Loaded, WidgetCommand::CheckProvider),
        ] {
            let step = transition(WidgetState::Unmounted, &WidgetEvent::Mount { script }, &settings());
            assert_eq!(step.commands, vec![expected]);
        }
    }

    #[test]
    fn mount_over_failed_tag_does_not_retry() {
        let step = transition(
            WidgetState::Unmounted,
            &WidgetEvent::Mount {
                script: ScriptStatus::Failed,
            },
            &settings(),
        );
        assert_eq!(step.state, WidgetState::Failed);
        assert!(step.commands.is_empty());
        assert_eq!(step.notifications.len(), 1);
    }

    #[test]
    fn mount_with_bad_client_id_fails_with_error() {
        let mut settings = settings();
        settings.sdk_src = Err(ConfigError::MissingClientId);
        let step = transition(
            WidgetState::Unmounted,
            &WidgetEvent::Mount {
                script: ScriptStatus::Absent,
            },
            &settings,
        );
        assert_eq!(step.state, WidgetState::Failed);
        assert!(step.commands.is_empty());
        assert_eq!(step.notifications.len(), 1);
        assert_eq!(step.notifications[0].kind, NotificationKind::Error);
    }

    #[test]
    fn missing_provider_fails_without_render() {
        let step = transition(WidgetState::ScriptInjecting, &loaded(false), &settings());
        assert_eq!(step.state, WidgetState::Failed);
        assert!(step.commands.is_empty());
        assert_eq!(step.notifications.len(), 1);
        assert_eq!(step.notifications[0].title, "SDK failed to load");
    }

    #[test]
    fn ready_script_requests_render() {
        let step = transition(WidgetState::ScriptInjecting, &loaded(true), &settings());
        assert_eq!(step.state, WidgetState::ScriptReady);
        assert_eq!(
            step.commands,
            vec![WidgetCommand::RenderButtons(RenderRequest::default())]
        );
        let rendered = transition(step.state, &WidgetEvent::Rendered, &settings());
        assert_eq!(rendered.state, WidgetState::ButtonsRendered);
    }

    #[test]
    fn failed_is_sticky_until_unmount() {
        let mount = WidgetEvent::Mount {
            script: ScriptStatus::Absent,
        };
        for event in [mount, loaded(true), WidgetEvent::Rendered] {
            let step = transition(WidgetState::Failed, &event, &settings());
            assert_eq!(step.state, WidgetState::Failed);
            assert!(step.commands.is_empty());
            assert!(step.notifications.is_empty());
        }
        let step = transition(WidgetState::Failed, &WidgetEvent::Unmount, &settings());
        assert_eq!(step.state, WidgetState::Unmounted);
    }

    #[test]
    fn late_script_event_after_unmount_is_ignored() {
        let step = transition(WidgetState::Unmounted, &loaded(true), &settings());
        assert_eq!(step, Step::stay(WidgetState::Unmounted));
    }

    #[test]
    fn unmount_closes_rendered_buttons() {
        let step = transition(WidgetState::ButtonsRendered, &WidgetEvent::Unmount, &settings());
        assert_eq!(step.state, WidgetState::Unmounted);
        assert_eq!(step.commands, vec![WidgetCommand::CloseButtons]);
    }

    #[test]
    fn settings_surface_config_errors() {
        let settings = WidgetSettings::from_config(&RuntimeConfig::default());
        assert_eq!(settings.sdk_src, Err(ConfigError::MissingClientId));
        assert_eq!(settings.render.selector(), "#paypal-button-container");
    }
}
