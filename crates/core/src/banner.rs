/// One `%c`-styled console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerLine {
    pub text: &'static str,
    pub css: &'static str,
}

impl BannerLine {
    /// The format string handed to `console.log` alongside `css`.
    pub fn format(&self) -> String {
        format!("%c{}", self.text)
    }
}

/// Greeting printed to the developer console on start.
pub const BANNER: [BannerLine; 3] = [
    BannerLine {
        text: "👋 Hi there!",
        css: "font-size: 20px; font-weight: bold; color: #64FFDA;",
    },
    BannerLine {
        text: "Looking at the code? Let's connect!",
        css: "font-size: 14px; color: #8892B0;",
    },
    BannerLine {
        text: "🔗 https://linkedin.com/in/pranav-tondgaonkar",
        css: "font-size: 12px; color: #64FFDA;",
    },
];
