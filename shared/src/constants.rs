// Layout of the virtual canvas the hunt plays out on.
pub const PAGE_HEIGHT: f64 = 100_000.0;
pub const DECOR_COUNT: usize = 3_000;

// Egg placement. Eggs stay away from the viewport edges and, best effort,
// away from each other.
pub const EGG_EDGE_INSET: f64 = 50.0;
pub const MIN_EGG_DISTANCE: f64 = 200.0;
pub const PLACEMENT_ATTEMPTS: u32 = 10;
pub const SPOILED_EGG_COUNT: usize = 30;

// Scroll-driven background. The first color change starts after an initial
// buffer; each full theme transition spans one section.
pub const SCROLL_BUFFER_VIEWPORTS: f64 = 6.0;
pub const SECTION_VIEWPORTS: f64 = 30.0;

// How long the "Code Copied" confirmation stays up.
pub const COPY_RESET_MS: u32 = 2_000;

pub const SPOILED_MESSAGE: &str = "Just clay! Try again!";
pub const BOOKING_URL: &str = "https://ThePotteryLoop.com";
