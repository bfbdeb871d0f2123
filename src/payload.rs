use serde::Serialize;

/// Body of `PUT /properties/on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnProperty {
    pub on: bool,
}

impl OnProperty {
    pub fn for_iteration(iteration: u64) -> Self {
        Self {
            on: iteration % 2 == 0,
        }
    }
}

/// Body of `POST /actions` requesting a `fade` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FadeAction {
    pub fade: FadeRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FadeRequest {
    pub input: FadeInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FadeInput {
    pub brightness: u64,
    pub duration: u64,
}

impl FadeAction {
    pub fn for_iteration(iteration: u64) -> Self {
        Self {
            fade: FadeRequest {
                input: FadeInput {
                    brightness: 10 * (iteration % 10),
                    duration: 1 + 200 * (iteration % 5),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    On(OnProperty),
    Fade(FadeAction),
}
