// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::content::ContentCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::content::ContentQueryService,
    },
    domain::seo::SiteSettings,
};

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    site: Arc<SiteSettings>,
}

impl ApplicationServices {
    pub fn new(
        site: SiteSettings,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let site = Arc::new(site);

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&slugger),
            Arc::clone(&site),
        ));

        Self {
            content_commands,
            content_queries,
            site,
        }
    }

    pub fn site(&self) -> &SiteSettings {
        &self.site
    }
}
