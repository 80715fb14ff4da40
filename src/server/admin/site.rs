use crate::server::admin::{descriptor::AdminModel, view::ModelView};

/// Registry of admin views, one per managed entity.
pub struct AdminSite {
    views: Vec<ModelView>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Registers the standard catalog views.
    pub fn setup() -> Self {
        let mut site = Self::new();

        site.add_view(ModelView::new(AdminModel::User));
        site.add_view(ModelView::new(AdminModel::TokenBlockedList));
        site.add_view(ModelView::new(AdminModel::People));
        site.add_view(ModelView::new(AdminModel::Planet));
        site.add_view(ModelView::new(AdminModel::Favorite));

        site
    }

    pub fn add_view(&mut self, view: ModelView) {
        self.views.push(view);
    }

    pub fn view(&self, slug: &str) -> Option<&ModelView> {
        self.views.iter().find(|view| view.model().slug() == slug)
    }

    pub fn view_mut(&mut self, slug: &str) -> Option<&mut ModelView> {
        self.views
            .iter_mut()
            .find(|view| view.model().slug() == slug)
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}
