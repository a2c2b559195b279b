use crate::models::image::{GenerationMode, ImageSize};

/// DashScope dimension strings. `qwen-image-plus` works in its own fixed
/// grid, so the four logical sizes collapse onto three provider sizes.
pub const PROVIDER_SIZE_SQUARE: &str = "1328*1328";
pub const PROVIDER_SIZE_LANDSCAPE: &str = "1664*928";
pub const PROVIDER_SIZE_PORTRAIT: &str = "928*1664";

/// Fixed clause wrapped around the prompt in cover mode. The original
/// prompt always survives verbatim inside the augmented one.
pub const COVER_PROMPT_PREFIX: &str = "公众号封面图：";
pub const COVER_PROMPT_SUFFIX: &str = "，适合公众号封面展示，简洁明了，具有视觉冲击力";

/// Maps (mode, logical size) to the provider dimension string. Total over
/// the enums; unhandled combinations fall back to the square default.
pub fn provider_size(mode: GenerationMode, size: ImageSize) -> &'static str {
    match mode {
        // Cover output is fixed at 900x500, rendered at 1664*928.
        GenerationMode::Cover => PROVIDER_SIZE_LANDSCAPE,
        GenerationMode::Normal => match size {
            ImageSize::Landscape => PROVIDER_SIZE_LANDSCAPE,
            ImageSize::Portrait => PROVIDER_SIZE_PORTRAIT,
            ImageSize::Square | ImageSize::Cover => PROVIDER_SIZE_SQUARE,
        },
    }
}

/// The prompt actually sent upstream: unchanged in normal mode, wrapped in
/// the fixed cover clause in cover mode.
pub fn effective_prompt(mode: GenerationMode, prompt: &str) -> String {
    match mode {
        GenerationMode::Cover => {
            format!("{}{}{}", COVER_PROMPT_PREFIX, prompt, COVER_PROMPT_SUFFIX)
        }
        GenerationMode::Normal => prompt.to_string(),
    }
}

/// The logical size reported back to the caller and recorded in history.
pub fn display_size(mode: GenerationMode, size: ImageSize) -> ImageSize {
    match mode {
        GenerationMode::Cover => ImageSize::Cover,
        GenerationMode::Normal => size,
    }
}
