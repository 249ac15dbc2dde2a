use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Leaflet-style URL template source.
///
/// Understands `{s}` (subdomain), `{z}`, `{x}`, `{y}`, `{r}` (retina suffix)
/// and `{accessToken}`.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlTemplateSource {
    template: String,
    subdomains: Vec<String>,
    access_token: Option<String>,
    zoom_offset: i32,
    retina: bool,
}

impl UrlTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            subdomains: Vec::new(),
            access_token: None,
            zoom_offset: 0,
            retina: false,
        }
    }

    /// Each character is one subdomain, as in Leaflet's `subdomains: 'abcd'`.
    pub fn with_subdomains(mut self, subdomains: &str) -> Self {
        self.subdomains = subdomains.chars().map(String::from).collect();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Shift the requested zoom, e.g. `-1` for 512 px tiles.
    pub fn with_zoom_offset(mut self, zoom_offset: i32) -> Self {
        self.zoom_offset = zoom_offset;
        self
    }

    pub fn with_retina(mut self, retina: bool) -> Self {
        self.retina = retina;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    pub fn zoom_offset(&self) -> i32 {
        self.zoom_offset
    }
}

impl TileSource for UrlTemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let zoom = (coord.z as i32 + self.zoom_offset).max(0);
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = ((coord.x as u64 + coord.y as u64) % self.subdomains.len() as u64) as usize;
            self.subdomains[idx].as_str()
        };

        self.template
            .replace("{s}", subdomain)
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{r}", if self.retina { "@2x" } else { "" })
            .replace("{accessToken}", self.access_token.as_deref().unwrap_or(""))
    }
}
