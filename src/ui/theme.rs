use crossterm::style::{Attribute, Color};
use termimad::MadSkin;

// Prompt text: warm amber, table body: cool teal grid on grey cells
pub const PROMPT_AMBER: Color = Color::Rgb { r: 255, g: 191, b: 0 }; // #FFBF00
pub const PROMPT_AMBER_DIM: Color = Color::Rgb { r: 204, g: 153, b: 51 }; // #CC9933
pub const GRID_TEAL: Color = Color::Rgb { r: 64, g: 160, b: 160 }; // #40A0A0
pub const CELL_GREY: Color = Color::Rgb { r: 210, g: 210, b: 210 }; // #D2D2D2

/// RGB of the horizontal rules framing a preview.
pub const RULE_RGB: (u8, u8, u8) = (64, 160, 160);

/// Skin for the prompt part of a merged document.
pub fn prompt_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.paragraph.set_fg(PROMPT_AMBER);
    skin.paragraph.add_attr(Attribute::Italic);
    skin.bold.set_fg(PROMPT_AMBER_DIM);
    skin.headers[0].set_fg(PROMPT_AMBER);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.inline_code.set_fg(PROMPT_AMBER_DIM);

    skin
}

/// Skin for the chunk rows, rendered as a markdown table.
pub fn table_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.table.set_fg(GRID_TEAL);
    skin.paragraph.set_fg(CELL_GREY);
    skin.bold.set_fg(GRID_TEAL);
    skin.code_block.set_fg(CELL_GREY);

    skin
}
