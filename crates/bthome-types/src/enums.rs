// ── Macro for event-code enum boilerplate ─────────────────────────────
//
// Event fields carry a one-byte code. Each enum below maps one or more
// codes to a named variant with a stable snake_case label, and every
// unlisted code collapses into `Unknown` instead of failing the decode.

macro_rules! event_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $($wire:literal)|+ => $label:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant, )+
      /// Any code not listed above.
      Unknown,
    }

    impl $name {
      /// Decode an event code. Unlisted codes map to `Unknown`.
      pub fn from_wire_byte(value: u8) -> Self {
        match value {
          $( $($wire)|+ => Self::$variant, )+
          _ => Self::Unknown,
        }
      }

      /// The label used as the reading value.
      pub fn as_str(self) -> &'static str {
        match self {
          $( Self::$variant => $label, )+
          Self::Unknown => "unknown",
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }
  };
}

// ── ButtonEvent ───────────────────────────────────────────────────────

event_enum! {
  /// Press pattern reported by object id 0x3A.
  ///
  /// ```text
  /// ┌───────────┬───────────────────┐
  /// │ Code      │ Label             │
  /// ├───────────┼───────────────────┤
  /// │ 0x00      │ none              │
  /// │ 0x01      │ press             │
  /// │ 0x02      │ double_press      │
  /// │ 0x03      │ triple_press      │
  /// │ 0x04      │ long_press        │
  /// │ 0x05      │ long_double_press │
  /// │ 0x06      │ long_triple_press │
  /// │ 0x80/0xFE │ hold_press        │
  /// └───────────┴───────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub enum ButtonEvent {
    None = 0x00 => "none",
    Press = 0x01 => "press",
    DoublePress = 0x02 => "double_press",
    TriplePress = 0x03 => "triple_press",
    LongPress = 0x04 => "long_press",
    LongDoublePress = 0x05 => "long_double_press",
    LongTriplePress = 0x06 => "long_triple_press",
    /// Some firmwares send 0xFE while the button is held.
    HoldPress = 0x80 | 0xFE => "hold_press",
  }
}

// ── DimmerEventKind ───────────────────────────────────────────────────

event_enum! {
  /// Rotation direction reported in the first byte of object id 0x3C.
  #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  pub enum DimmerEventKind {
    None = 0x00 => "none",
    RotateLeft = 0x01 => "rotate_left",
    RotateRight = 0x02 => "rotate_right",
  }
}
