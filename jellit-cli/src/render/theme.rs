use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Soft, low-contrast colors for a journal that shouldn't shout.
pub struct Calm;

impl Calm {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Calm::TEXT);
        skin.bold.set_fg(Calm::SAGE);
        skin.italic.set_fg(Calm::MUTED);

        skin.headers[0].set_fg(Calm::ROSE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Calm::SAND);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Calm::SKY);
        skin.bullet.set_fg(Calm::ROSE);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Calm::MUTED);
        skin.inline_code.set_fg(Calm::MUTED);
        skin.inline_code.set_bg(Calm::BG);

        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x2B,
        g: 0x2D,
        b: 0x31,
    }; // #2B2D31
    pub const TEXT: Color = Color::Rgb {
        r: 0xD8,
        g: 0xD4,
        b: 0xCC,
    }; // #D8D4CC
    pub const MUTED: Color = Color::Rgb {
        r: 0x8A,
        g: 0x8F,
        b: 0x98,
    }; // #8A8F98
    pub const ROSE: Color = Color::Rgb {
        r: 0xE3,
        g: 0x9A,
        b: 0x9A,
    }; // #E39A9A
    pub const SAND: Color = Color::Rgb {
        r: 0xE6,
        g: 0xC8,
        b: 0x8F,
    }; // #E6C88F
    pub const SAGE: Color = Color::Rgb {
        r: 0x9C,
        g: 0xC4,
        b: 0x9A,
    }; // #9CC49A
    pub const SKY: Color = Color::Rgb {
        r: 0x8F,
        g: 0xB8,
        b: 0xDE,
    }; // #8FB8DE
}
