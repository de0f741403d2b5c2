pub const HEADER: &str = "fixed top-0 w-full bg-white bg-opacity-90 z-10 p-4 shadow-sm";
pub const HEADER_TITLE: &str = "text-2xl font-bold text-center text-black";
pub const HERO_SECTION: &str = "container mx-auto px-4 py-8";
pub const HERO_TITLE: &str = "text-4xl font-bold text-center mb-8 text-black";
pub const HERO_TEXT: &str = "text-center text-lg mb-12 text-black";
pub const CANVAS: &str = "relative min-h-[100000px] w-full overflow-hidden";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1000] flex items-center justify-center";
pub const MODAL_OVERLAY: &str = "absolute inset-0 bg-black bg-opacity-50";
pub const MODAL_PANEL: &str =
    "relative bg-white p-6 rounded-lg shadow-xl max-w-sm mx-4 z-[1001] animate-fadeIn";
pub const MODAL_CLOSE: &str = "absolute top-2 right-2 text-gray-700 hover:text-gray-900";
pub const MODAL_TITLE: &str = "text-2xl font-bold mb-4 text-black";
pub const MODAL_BODY: &str = "text-lg mb-4 text-black";
pub const MODAL_VALUE: &str = "text-xl font-bold mb-4 text-black";
pub const MODAL_HINT: &str = "text-sm text-gray-700";

pub const COPY_BUTTON_IDLE: &str =
    "w-full px-4 py-2 rounded-lg transition-colors flex items-center justify-center gap-2 bg-terracotta text-white hover:bg-terracotta-dark";
pub const COPY_BUTTON_DONE: &str =
    "w-full px-4 py-2 rounded-lg transition-colors flex items-center justify-center gap-2 bg-green-500 text-white";
pub const BOOK_BUTTON: &str =
    "w-full px-4 py-2 bg-sage text-white rounded-lg hover:bg-sage-dark transition-colors text-center";
