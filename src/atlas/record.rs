/// One entry of the atlas descriptor: where a sprite sits in the packed
/// sheet, and the frame geometry needed to undo trimming and rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRecord {
    /// Output file base name (written as `<name>.png`)
    pub name: String,
    /// Top-left of the packed region within the sheet
    pub x: u32,
    pub y: u32,
    /// Size of the packed region within the sheet
    pub width: u32,
    pub height: u32,
    /// Offset of the packed region within the original untrimmed frame.
    /// Packers emit these as negative values; may be zero or positive.
    pub frame_x: i32,
    pub frame_y: i32,
    /// Size of the original untrimmed frame
    pub frame_width: u32,
    pub frame_height: u32,
    /// Whether the packed region is stored rotated 90° relative to its
    /// original orientation
    pub rotated: bool,
}
