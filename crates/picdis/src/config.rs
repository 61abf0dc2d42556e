//! Formatting configuration.

/// Radix used to print `Literal` operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LiteralRadix {
    /// `0x6`
    #[default]
    Hex,
    /// `b'00000110'`
    Bin,
    /// `6`
    Dec,
}

/// Toggle flags for formatting options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatFlags(u8);

impl FormatFlags {
    const ADDRESS_LABEL: u8 = 1 << 0;
    const ADDRESS_COLUMN: u8 = 1 << 1;
    const DESTINATION_COMMENT: u8 = 1 << 2;
    const LITERAL_ASCII_COMMENT: u8 = 1 << 3;
    const ORIGINAL_OPCODE: u8 = 1 << 4;

    const fn set_flag(&mut self, flag: u8, enabled: bool) {
        if enabled {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    const fn has_flag(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    #[must_use]
    pub const fn address_label(self) -> bool {
        self.has_flag(Self::ADDRESS_LABEL)
    }

    pub const fn set_address_label(&mut self, enabled: bool) {
        self.set_flag(Self::ADDRESS_LABEL, enabled);
    }

    #[must_use]
    pub const fn address_column(self) -> bool {
        self.has_flag(Self::ADDRESS_COLUMN)
    }

    pub const fn set_address_column(&mut self, enabled: bool) {
        self.set_flag(Self::ADDRESS_COLUMN, enabled);
    }

    #[must_use]
    pub const fn destination_comment(self) -> bool {
        self.has_flag(Self::DESTINATION_COMMENT)
    }

    pub const fn set_destination_comment(&mut self, enabled: bool) {
        self.set_flag(Self::DESTINATION_COMMENT, enabled);
    }

    #[must_use]
    pub const fn literal_ascii_comment(self) -> bool {
        self.has_flag(Self::LITERAL_ASCII_COMMENT)
    }

    pub const fn set_literal_ascii_comment(&mut self, enabled: bool) {
        self.set_flag(Self::LITERAL_ASCII_COMMENT, enabled);
    }

    #[must_use]
    pub const fn original_opcode(self) -> bool {
        self.has_flag(Self::ORIGINAL_OPCODE)
    }

    pub const fn set_original_opcode(&mut self, enabled: bool) {
        self.set_flag(Self::ORIGINAL_OPCODE, enabled);
    }
}

/// Options for rendering disassembly. Fixed for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Toggle flags.
    pub flags: FormatFlags,
    /// Radix for literal operands.
    pub radix: LiteralRadix,
    /// Prefix for address labels; only used when `flags.address_label()` is set.
    pub label_prefix: String,
    /// Zero-padded width of hex addresses in labels, origin markers and
    /// absolute operands.
    pub address_width: usize,
}

/// Default hex address field width.
pub const DEFAULT_ADDRESS_WIDTH: usize = 3;

impl Default for FormatConfig {
    fn default() -> Self {
        let mut flags = FormatFlags::default();
        flags.set_address_column(true);
        flags.set_destination_comment(true);
        Self {
            flags,
            radix: LiteralRadix::default(),
            label_prefix: String::new(),
            address_width: DEFAULT_ADDRESS_WIDTH,
        }
    }
}

impl FormatConfig {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every toggle cleared: bare tab-indented mnemonics.
    #[must_use]
    pub fn plain() -> Self {
        Self { flags: FormatFlags::default(), ..Self::default() }
    }

    /// Emit address labels with `prefix`, origin markers on discontinuities
    /// and a final `end` marker.
    #[must_use]
    pub fn with_address_label(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self.flags.set_address_label(true);
        self
    }

    /// Set the plain hex address column.
    #[must_use]
    pub const fn with_address_column(mut self, enabled: bool) -> Self {
        self.flags.set_address_column(enabled);
        self
    }

    /// Set the destination comment on relative branches.
    #[must_use]
    pub const fn with_destination_comment(mut self, enabled: bool) -> Self {
        self.flags.set_destination_comment(enabled);
        self
    }

    /// Set the ASCII comment on literal operands.
    #[must_use]
    pub const fn with_literal_ascii_comment(mut self, enabled: bool) -> Self {
        self.flags.set_literal_ascii_comment(enabled);
        self
    }

    /// Set the original opcode column.
    #[must_use]
    pub const fn with_original_opcode(mut self, enabled: bool) -> Self {
        self.flags.set_original_opcode(enabled);
        self
    }

    #[must_use]
    pub const fn with_literal_radix(mut self, radix: LiteralRadix) -> Self {
        self.radix = radix;
        self
    }

    #[must_use]
    pub const fn with_address_width(mut self, width: usize) -> Self {
        self.address_width = width;
        self
    }

    /// Label prefix, if address labels are enabled.
    #[must_use]
    pub fn label_prefix(&self) -> Option<&str> {
        self.flags.address_label().then_some(self.label_prefix.as_str())
    }
}
