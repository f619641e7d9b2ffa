//! Inline SVG icons for exported pages.
//!
//! Sections name icons by string (`"Zap"`, `"Shield"`). Each name maps to a
//! small set of SVG shapes drawn either as a 24x24 outline or a filled
//! glyph. Unknown names fall back to [`FALLBACK`].

use maud::{Markup, html};

pub const FALLBACK: &str = "Star";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Stroked with `currentColor`, round caps and joins.
    Outline,
    /// Filled with `currentColor`.
    Solid,
}

#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
    Line {
        x1: &'static str,
        y1: &'static str,
        x2: &'static str,
        y2: &'static str,
    },
    Polyline(&'static str),
    Polygon(&'static str),
    /// Empty `rx` means square corners.
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
    Ellipse {
        cx: &'static str,
        cy: &'static str,
        rx: &'static str,
        ry: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Icon {
    pub style: Style,
    pub shapes: &'static [Shape],
}

use Shape::*;
use Style::*;

static ICONS: &[(&str, Icon)] = &[
    (
        "Palette",
        Icon {
            style: Outline,
            shapes: &[
            Path("M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zM21 5a2 2 0 00-2-2h-4a2 2 0 00-2 2v6a2 2 0 002 2h4a2 2 0 002-2V5z"),
            ],
        },
    ),
    (
        "PaintBrush",
        Icon {
            style: Outline,
            shapes: &[
            Path("M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zM21 5a2 2 0 00-2-2h-4a2 2 0 00-2 2v6a2 2 0 002 2h4a2 2 0 002-2V5z"),
            ],
        },
    ),
    (
        "Code",
        Icon {
            style: Outline,
            shapes: &[
            Path("M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4"),
            ],
        },
    ),
    (
        "Code2",
        Icon {
            style: Outline,
            shapes: &[
            Path("m18 16 4-4-4-4M6 8l-4 4 4 4m14.5-13-5 14"),
            ],
        },
    ),
    (
        "Monitor",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "2", y: "3", width: "20", height: "14", rx: "2" },
            Line { x1: "8", y1: "21", x2: "16", y2: "21" },
            Line { x1: "12", y1: "17", x2: "12", y2: "21" },
            ],
        },
    ),
    (
        "Smartphone",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "5", y: "2", width: "14", height: "20", rx: "2" },
            Path("M12 18h.01"),
            ],
        },
    ),
    (
        "Laptop",
        Icon {
            style: Outline,
            shapes: &[
            Path("M20 16V7a2 2 0 00-2-2H6a2 2 0 00-2 2v9m16 0H4m16 0l1.28 2.55a1 1 0 01-.9 1.45H3.62a1 1 0 01-.9-1.45L4 16"),
            ],
        },
    ),
    (
        "Database",
        Icon {
            style: Outline,
            shapes: &[
            Ellipse { cx: "12", cy: "5", rx: "9", ry: "3" },
            Path("M3 5v14c0 1.66 4.03 3 9 3s9-1.34 9-3V5"),
            ],
        },
    ),
    (
        "Server",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "2", y: "3", width: "20", height: "4", rx: "1" },
            Rect { x: "2", y: "9", width: "20", height: "4", rx: "1" },
            Rect { x: "2", y: "15", width: "20", height: "4", rx: "1" },
            Line { x1: "6", y1: "5", x2: "6.01", y2: "5" },
            Line { x1: "6", y1: "11", x2: "6.01", y2: "11" },
            Line { x1: "6", y1: "17", x2: "6.01", y2: "17" },
            ],
        },
    ),
    (
        "Globe",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "12", r: "10" },
            Line { x1: "2", y1: "12", x2: "22", y2: "12" },
            Path("M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
            ],
        },
    ),
    (
        "TrendingUp",
        Icon {
            style: Outline,
            shapes: &[
            Path("M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"),
            ],
        },
    ),
    (
        "BarChart",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "12", y1: "20", x2: "12", y2: "10" },
            Line { x1: "18", y1: "20", x2: "18", y2: "4" },
            Line { x1: "6", y1: "20", x2: "6", y2: "16" },
            ],
        },
    ),
    (
        "BarChart3",
        Icon {
            style: Outline,
            shapes: &[
            Path("M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"),
            ],
        },
    ),
    (
        "PieChart",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21.21 15.89A10 10 0 118 2.83M22 12A10 10 0 0012 2v10z"),
            ],
        },
    ),
    (
        "DollarSign",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "12", y1: "1", x2: "12", y2: "23" },
            Path("M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6"),
            ],
        },
    ),
    (
        "CreditCard",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "1", y: "4", width: "22", height: "16", rx: "2" },
            Line { x1: "1", y1: "10", x2: "23", y2: "10" },
            ],
        },
    ),
    (
        "Briefcase",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "2", y: "7", width: "20", height: "14", rx: "2" },
            Path("M16 21V5a2 2 0 00-2-2h-4a2 2 0 00-2 2v16"),
            ],
        },
    ),
    (
        "Building",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"),
            Circle { cx: "12", cy: "10", r: "3" },
            ],
        },
    ),
    (
        "Shield",
        Icon {
            style: Outline,
            shapes: &[
            Path("M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"),
            ],
        },
    ),
    (
        "ShieldCheck",
        Icon {
            style: Outline,
            shapes: &[
            Path("M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"),
            ],
        },
    ),
    (
        "Lock",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "3", y: "11", width: "18", height: "11", rx: "2" },
            Path("M7 11V7a5 5 0 0110 0v4"),
            ],
        },
    ),
    (
        "Key",
        Icon {
            style: Outline,
            shapes: &[
            Path("M15 7a2 2 0 012 2m4 0a6 6 0 01-7.743 5.743L11 17H9v2H7v2H4a1 1 0 01-1-1v-2.586a1 1 0 01.293-.707l5.964-5.964A6 6 0 1721 9z"),
            ],
        },
    ),
    (
        "Zap",
        Icon {
            style: Outline,
            shapes: &[
            Polygon("13,2 3,14 12,14 11,22 21,10 12,10"),
            ],
        },
    ),
    (
        "Gauge",
        Icon {
            style: Outline,
            shapes: &[
            Path("M12 15a3 3 0 100-6 3 3 0 000 6zm0 0v6m9-9.5a9 9 0 11-18 0"),
            ],
        },
    ),
    (
        "Timer",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "13", r: "8" },
            Path("M12 9v4l2 2m6-6l-2-2M6 6l2 2"),
            ],
        },
    ),
    (
        "Activity",
        Icon {
            style: Outline,
            shapes: &[
            Polyline("22,12 18,12 15,21 9,3 6,12 2,12"),
            ],
        },
    ),
    (
        "Rocket",
        Icon {
            style: Outline,
            shapes: &[
            Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 00-2.91-.09zM12 15l-3-3a22 22 0 012-3.95A12.88 12.88 0 0122 2c-2.22 0-4.44.87-6.05 2.05A22 22 0 0113 6l-3 3 2 2z"),
            ],
        },
    ),
    (
        "Mail",
        Icon {
            style: Outline,
            shapes: &[
            Path("M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"),
            Polyline("22,6 12,13 2,6"),
            ],
        },
    ),
    (
        "Phone",
        Icon {
            style: Outline,
            shapes: &[
            Path("M22 16.92v3a2 2 0 01-2.18 2 19.79 19.79 0 01-8.63-3.07 19.5 19.5 0 01-6-6 19.79 19.79 0 01-3.07-8.67A2 2 0 014.11 2h3a2 2 0 012 1.72 12.84 12.84 0 00.7 2.81 2 2 0 01-.45 2.11L8.09 9.91a16 16 0 006 6l1.27-1.27a2 2 0 012.11-.45 12.84 12.84 0 002.81.7A2 2 0 0122 16.92z"),
            ],
        },
    ),
    (
        "MessageCircle",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21 11.5a8.38 8.38 0 01-.9 3.8 8.5 8.5 0 01-7.6 4.7 8.38 8.38 0 01-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 01-.9-3.8 8.5 8.5 0 014.7-7.6 8.38 8.38 0 013.8-.9h.5a8.48 8.48 0 018 8v.5z"),
            ],
        },
    ),
    (
        "Send",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "22", y1: "2", x2: "11", y2: "13" },
            Polygon("22,2 15,22 11,13 2,9"),
            ],
        },
    ),
    (
        "Users",
        Icon {
            style: Outline,
            shapes: &[
            Path("M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"),
            Circle { cx: "9", cy: "7", r: "4" },
            Path("M23 21v-2a4 4 0 0 0-3-3.87m-4-12a4 4 0 0 1 0 7.75"),
            ],
        },
    ),
    (
        "User",
        Icon {
            style: Outline,
            shapes: &[
            Path("M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"),
            Circle { cx: "12", cy: "7", r: "4" },
            ],
        },
    ),
    (
        "Facebook",
        Icon {
            style: Solid,
            shapes: &[
            Path("M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z"),
            ],
        },
    ),
    (
        "Twitter",
        Icon {
            style: Solid,
            shapes: &[
            Path("M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z"),
            ],
        },
    ),
    (
        "Instagram",
        Icon {
            style: Solid,
            shapes: &[
            Path("M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z"),
            ],
        },
    ),
    (
        "LinkedIn",
        Icon {
            style: Solid,
            shapes: &[
            Path("M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"),
            ],
        },
    ),
    (
        "Youtube",
        Icon {
            style: Solid,
            shapes: &[
            Path("M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z"),
            ],
        },
    ),
    (
        "Github",
        Icon {
            style: Solid,
            shapes: &[
            Path("M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12"),
            ],
        },
    ),
    (
        "Star",
        Icon {
            style: Solid,
            shapes: &[
            Path("M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"),
            ],
        },
    ),
    (
        "Heart",
        Icon {
            style: Solid,
            shapes: &[
            Path("M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"),
            ],
        },
    ),
    (
        "Check",
        Icon {
            style: Outline,
            shapes: &[
            Polyline("20,6 9,17 4,12"),
            ],
        },
    ),
    (
        "CheckCircle",
        Icon {
            style: Outline,
            shapes: &[
            Path("M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"),
            ],
        },
    ),
    (
        "X",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "18", y1: "6", x2: "6", y2: "18" },
            Line { x1: "6", y1: "6", x2: "18", y2: "18" },
            ],
        },
    ),
    (
        "ArrowRight",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "5", y1: "12", x2: "19", y2: "12" },
            Polyline("12,5 19,12 12,19"),
            ],
        },
    ),
    (
        "ChevronDown",
        Icon {
            style: Outline,
            shapes: &[
            Polyline("6,9 12,15 18,9"),
            ],
        },
    ),
    (
        "Menu",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "3", y1: "6", x2: "21", y2: "6" },
            Line { x1: "3", y1: "12", x2: "21", y2: "12" },
            Line { x1: "3", y1: "18", x2: "21", y2: "18" },
            ],
        },
    ),
    (
        "Search",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "11", cy: "11", r: "8" },
            Path("M21 21l-4.35-4.35"),
            ],
        },
    ),
    (
        "Settings",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "12", r: "3" },
            Path("M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1 0 2.83 2 2 0 0 1-2.83 0l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-2 2 2 2 0 0 1-2-2v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83 0 2 2 0 0 1 0-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1-2-2 2 2 0 0 1 2-2h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 0-2.83 2 2 0 0 1 2.83 0l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1 1.51V3a2 2 0 0 1 2-2 2 2 0 0 1 2 2v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 0 2 2 0 0 1 0 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 2 2 2 2 0 0 1-2 2h-.09a1.65 1.65 0 0 0-1.51 1z"),
            ],
        },
    ),
    (
        "MapPin",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"),
            Circle { cx: "12", cy: "10", r: "3" },
            ],
        },
    ),
    (
        "Clock",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "12", r: "10" },
            Polyline("12,6 12,12 16,14"),
            ],
        },
    ),
    (
        "Calendar",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "3", y: "4", width: "18", height: "18", rx: "2" },
            Line { x1: "16", y1: "2", x2: "16", y2: "6" },
            Line { x1: "8", y1: "2", x2: "8", y2: "6" },
            Line { x1: "3", y1: "10", x2: "21", y2: "10" },
            ],
        },
    ),
    (
        "Camera",
        Icon {
            style: Outline,
            shapes: &[
            Path("M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z"),
            Circle { cx: "12", cy: "13", r: "4" },
            ],
        },
    ),
    (
        "Image",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "3", y: "3", width: "18", height: "18", rx: "2" },
            Circle { cx: "8.5", cy: "8.5", r: "1.5" },
            Polyline("21,15 16,10 5,21"),
            ],
        },
    ),
    (
        "Video",
        Icon {
            style: Outline,
            shapes: &[
            Polygon("23,7 16,12 23,17"),
            Rect { x: "1", y: "5", width: "15", height: "14", rx: "2" },
            ],
        },
    ),
    (
        "Download",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
            Polyline("7,10 12,15 17,10"),
            Line { x1: "12", y1: "15", x2: "12", y2: "3" },
            ],
        },
    ),
    (
        "Upload",
        Icon {
            style: Outline,
            shapes: &[
            Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
            Polyline("17,8 12,3 7,8"),
            Line { x1: "12", y1: "3", x2: "12", y2: "15" },
            ],
        },
    ),
    (
        "Link",
        Icon {
            style: Outline,
            shapes: &[
            Path("M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"),
            Path("M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"),
            ],
        },
    ),
    (
        "ExternalLink",
        Icon {
            style: Outline,
            shapes: &[
            Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            Polyline("15,3 21,3 21,9"),
            Line { x1: "10", y1: "14", x2: "21", y2: "3" },
            ],
        },
    ),
    (
        "Eye",
        Icon {
            style: Outline,
            shapes: &[
            Path("M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"),
            Circle { cx: "12", cy: "12", r: "3" },
            ],
        },
    ),
    (
        "EyeOff",
        Icon {
            style: Outline,
            shapes: &[
            Path("M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24"),
            Line { x1: "1", y1: "1", x2: "23", y2: "23" },
            ],
        },
    ),
    (
        "Play",
        Icon {
            style: Solid,
            shapes: &[
            Polygon("5,3 19,12 5,21"),
            ],
        },
    ),
    (
        "Pause",
        Icon {
            style: Solid,
            shapes: &[
            Rect { x: "6", y: "4", width: "4", height: "16", rx: "" },
            Rect { x: "14", y: "4", width: "4", height: "16", rx: "" },
            ],
        },
    ),
    (
        "Plus",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "12", y1: "5", x2: "12", y2: "19" },
            Line { x1: "5", y1: "12", x2: "19", y2: "12" },
            ],
        },
    ),
    (
        "Minus",
        Icon {
            style: Outline,
            shapes: &[
            Line { x1: "5", y1: "12", x2: "19", y2: "12" },
            ],
        },
    ),
    (
        "Edit",
        Icon {
            style: Outline,
            shapes: &[
            Path("M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"),
            Path("M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"),
            ],
        },
    ),
    (
        "Trash",
        Icon {
            style: Outline,
            shapes: &[
            Polyline("3,6 5,6 21,6"),
            Path("M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"),
            ],
        },
    ),
    (
        "Copy",
        Icon {
            style: Outline,
            shapes: &[
            Rect { x: "9", y: "9", width: "13", height: "13", rx: "2" },
            Path("M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"),
            ],
        },
    ),
    (
        "File",
        Icon {
            style: Outline,
            shapes: &[
            Path("M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z"),
            Polyline("13,2 13,9 20,9"),
            ],
        },
    ),
    (
        "Folder",
        Icon {
            style: Outline,
            shapes: &[
            Path("M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"),
            ],
        },
    ),
    (
        "Award",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "8", r: "7" },
            Polyline("8.21,13.89 7,23 12,20 17,23 15.79,13.88"),
            ],
        },
    ),
    (
        "Target",
        Icon {
            style: Outline,
            shapes: &[
            Circle { cx: "12", cy: "12", r: "10" },
            Circle { cx: "12", cy: "12", r: "6" },
            Circle { cx: "12", cy: "12", r: "2" },
            ],
        },
    ),];

/// Icon names known to the exporter, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(name, _)| *name)
}

/// Look up an icon by exact name.
pub fn find(name: &str) -> Option<&'static Icon> {
    ICONS.iter().find(|(n, _)| *n == name).map(|(_, icon)| icon)
}

fn lookup(name: &str) -> &'static Icon {
    find(name)
        .or_else(|| find(FALLBACK))
        .unwrap_or(&ICONS[0].1)
}

fn shape(s: &Shape, style: Style) -> Markup {
    // Outline strokes are declared on every child element.
    let (cap, join, width) = match style {
        Outline => (Some("round"), Some("round"), Some("2")),
        Solid => (None, None, None),
    };
    match *s {
        Path(d) => html! {
            path stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] d=(d) {}
        },
        Circle { cx, cy, r } => html! {
            circle cx=(cx) cy=(cy) r=(r) stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
        },
        Line { x1, y1, x2, y2 } => html! {
            line x1=(x1) y1=(y1) x2=(x2) y2=(y2) stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
        },
        Polyline(points) => html! {
            polyline points=(points) stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
        },
        Polygon(points) => html! {
            polygon points=(points) stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
        },
        Rect { x, y, width: w, height: h, rx } => {
            let rx = (!rx.is_empty()).then_some(rx);
            html! {
                rect x=(x) y=(y) width=(w) height=(h) rx=[rx] stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
            }
        }
        Ellipse { cx, cy, rx, ry } => html! {
            ellipse cx=(cx) cy=(cy) rx=(rx) ry=(ry) stroke-linecap=[cap] stroke-linejoin=[join] stroke-width=[width] {}
        },
    }
}

/// Render `name` as an inline `<svg class="icon">`, falling back to a star.
pub fn icon_svg(name: &str) -> Markup {
    let icon = lookup(name);
    let (fill, stroke) = match icon.style {
        Outline => ("none", Some("currentColor")),
        Solid => ("currentColor", None),
    };
    html! {
        svg class="icon" fill=(fill) stroke=[stroke] viewBox="0 0 24 24" {
            @for s in icon.shapes {
                (shape(s, icon.style))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let all: Vec<&str> = names().collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert!(all.len() >= 70);
    }

    #[test]
    fn every_icon_has_shapes() {
        for (name, icon) in ICONS {
            assert!(!icon.shapes.is_empty(), "{name} has no shapes");
        }
    }

    #[test]
    fn outline_icon_markup() {
        let svg = icon_svg("Check").into_string();
        assert!(svg.starts_with(r#"<svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">"#));
        assert!(svg.contains(r#"points="20,6 9,17 4,12""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn solid_icon_has_no_stroke() {
        let svg = icon_svg("Github").into_string();
        assert!(svg.contains(r#"fill="currentColor""#));
        assert!(!svg.contains("stroke"));
    }

    #[test]
    fn unknown_name_falls_back_to_star() {
        assert_eq!(
            icon_svg("NoSuchIcon").into_string(),
            icon_svg(FALLBACK).into_string()
        );
        assert!(find("NoSuchIcon").is_none());
    }

    #[test]
    fn square_rect_omits_rx() {
        let svg = icon_svg("Pause").into_string();
        assert!(svg.contains(r#"<rect x="6" y="4" width="4" height="16">"#));
        assert!(!svg.contains("rx="));
    }
}
