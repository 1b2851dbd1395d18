// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};

pub struct ContentCommandService {
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ContentCommandService {
    pub fn new(slugger: Arc<dyn SlugGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { slugger, clock }
    }
}
