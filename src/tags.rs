//! Known-tag membership tests backing the development-only
//! [`AppConfig::is_native_tag`](`crate::app::AppConfig::is_native_tag`) capability.

use hashbrown::HashSet;

const HTML_TAGS: &[&str] = &[
	"html", "body", "base", "head", "link", "meta", "style", "title", "address", "article",
	"aside", "footer", "header", "h1", "h2", "h3", "h4", "h5", "h6", "hgroup", "nav", "section",
	"div", "dd", "dl", "dt", "figcaption", "figure", "picture", "hr", "img", "li", "main", "ol",
	"p", "pre", "ul", "a", "b", "abbr", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em",
	"i", "kbd", "mark", "q", "rp", "rt", "rtc", "ruby", "s", "samp", "small", "span", "strong",
	"sub", "sup", "time", "u", "var", "wbr", "area", "audio", "map", "track", "video", "embed",
	"object", "param", "source", "canvas", "script", "noscript", "del", "ins", "caption", "col",
	"colgroup", "table", "thead", "tbody", "td", "th", "tr", "button", "datalist", "fieldset",
	"form", "input", "label", "legend", "meter", "optgroup", "option", "output", "progress",
	"select", "textarea", "details", "dialog", "menu", "summary", "template", "blockquote",
	"iframe", "tfoot",
];

const SVG_TAGS: &[&str] = &[
	"svg", "animate", "animateMotion", "animateTransform", "circle", "clipPath",
	"color-profile", "defs", "desc", "discard", "ellipse", "feBlend", "feColorMatrix",
	"feComponentTransfer", "feComposite", "feConvolveMatrix", "feDiffuseLighting",
	"feDisplacementMap", "feDistanceLight", "feDropShadow", "feFlood", "feFuncA", "feFuncB",
	"feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge", "feMergeNode", "feMorphology",
	"feOffset", "fePointLight", "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence",
	"filter", "foreignObject", "g", "hatch", "hatchpath", "image", "line", "linearGradient",
	"marker", "mask", "mesh", "meshgradient", "meshpatch", "meshrow", "metadata", "mpath",
	"path", "pattern", "polygon", "polyline", "radialGradient", "rect", "set", "solidcolor",
	"stop", "switch", "symbol", "text", "textPath", "title", "tspan", "unknown", "use", "view",
];

thread_local! {
	static HTML_TAG_SET: HashSet<&'static str> = HTML_TAGS.iter().copied().collect();
	static SVG_TAG_SET: HashSet<&'static str> = SVG_TAGS.iter().copied().collect();
}

/// Whether `tag` is a known HTML tag name. Case-sensitive.
#[must_use]
pub fn is_html_tag(tag: &str) -> bool {
	HTML_TAG_SET.with(|tags| tags.contains(tag))
}

/// Whether `tag` is a known SVG tag name. Case-sensitive.
#[must_use]
pub fn is_svg_tag(tag: &str) -> bool {
	SVG_TAG_SET.with(|tags| tags.contains(tag))
}

/// Whether `tag` names a native (HTML or SVG) element, as opposed to a custom component.
#[must_use]
pub fn is_native_tag(tag: &str) -> bool {
	is_html_tag(tag) || is_svg_tag(tag)
}
