use crate::error::HandlerResult;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;
use std::path::Path;
use tera::{Context, Tera};

/// Server-side HTML templates, loaded once at startup.
///
/// Templates are looked up by their path relative to the template directory,
/// e.g. `products/show.html`. Files end in `.html` so Tera escapes every
/// interpolated value.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let glob = format!("{}/**/*.html", dir.display());
        Ok(Self {
            tera: Tera::new(&glob)?,
        })
    }

    pub fn render(&self, name: &str, context: &Context) -> HandlerResult {
        let body = self.tera.render(name, context)?;
        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body))
    }
}

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
