pub const CONTAINER: &str = "min-h-screen bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const ROLL_SCREEN: &str = "relative min-h-screen w-full overflow-hidden bg-gradient-to-b from-gray-900 via-indigo-950 to-black";
pub const ROLL_CONTENT: &str = "relative z-10 flex min-h-screen flex-col items-center justify-center gap-10 px-4";
pub const ROLL_CAPTION: &str = "text-center text-lg font-medium uppercase tracking-widest text-white/70";
pub const TICKER_CONTAINER: &str = "w-full select-none space-y-4 overflow-hidden py-6 cursor-pointer";
pub const TICKER_LANE: &str = "w-full overflow-hidden";
pub const TICKER_NUMBER: &str = "px-6 text-5xl font-extrabold text-white/90 tabular-nums";
pub const CARD: &str = "bg-gray-800 rounded-lg shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const TEXT_H2: &str = "text-2xl font-bold text-white";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-400";
pub const LINK: &str = "text-blue-400 hover:text-blue-300 transition-colors duration-200";
