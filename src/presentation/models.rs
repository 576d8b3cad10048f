use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "payload")]
pub enum PresentationEventKind {
    Notification {
        kind: NotificationKind,
        message: String,
    },
    Celebrate,
    ShowSummary,
    Onboard,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationEvent {
    pub id: usize,
    pub event: PresentationEventKind,
}
