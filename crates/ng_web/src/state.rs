use crate::PageController;

pub struct AppState {
    pub controller: PageController,
}

impl AppState {
    pub fn new(controller: PageController) -> Self {
        Self { controller }
    }
}
