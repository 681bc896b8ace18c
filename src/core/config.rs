/// Asset locations and contact endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub wallpaper_url: String,
    pub window_day_url: String,
    pub window_night_url: String,
    pub email: String,
    pub profile_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallpaper_url: "/images/tiger.jpg".to_string(),
            window_day_url: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?q=80&w=2000&auto=format&fit=crop".to_string(),
            window_night_url: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?q=80&w=2000&auto=format&fit=crop".to_string(),
            email: "contact.yousufshb@gmail.com".to_string(),
            profile_url: "https://www.linkedin.com/".to_string(),
        }
    }
}

impl Config {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Images worth decoding before the first paint.
    pub fn image_urls(&self) -> [&str; 3] {
        [
            &self.wallpaper_url,
            &self.window_day_url,
            &self.window_night_url,
        ]
    }
}
