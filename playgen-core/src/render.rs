//! Player document renderer.
//!
//! Produces a complete, self-contained HTML document for each supported
//! playback library. Rendering is a pure function of the request fields,
//! the generated element id, and the fixed presentation assets: no I/O,
//! no clock, no randomness.
//!
//! Every variant is described by a static [`VariantSpec`] record (title,
//! head assets, style block, body markup, init script) fed through one
//! shared document shell. User-supplied values are escaped per context:
//! HTML-attribute escaping in markup, JSON string literals inside the
//! inline `<script>` block.

use crate::config::AssetConfig;
use crate::player::PlayerType;

/// Inputs for a single document render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Playback library variant to emit
    pub player_type: PlayerType,
    /// Direct media URL, treated as opaque
    pub video_url: &'a str,
    /// Start playback automatically
    pub autoplay: bool,
    /// Show playback controls
    pub controls: bool,
    /// DOM element id embedded into the markup
    pub element_id: &'a str,
    /// Fixed presentation assets
    pub assets: &'a AssetConfig,
}

/// Static description of one player variant.
struct VariantSpec {
    title: &'static str,
    head_assets: &'static str,
    style_block: &'static str,
    body: &'static str,
    library_script: &'static str,
    init_script: &'static str,
}

const DOCUMENT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>{{ head_assets }}
    <style>
{{ style_block }}
    </style>
</head>
<body>
    {{ body }}{{ library_script }}
    <script>
{{ init_script }}
    </script>
</body>
</html>
"#;

/// Client-side config block shared by every variant, including the bare
/// HTML5 one.
const CONFIG_BLOCK: &str = r#"        const config = {
            gDriveApikey: {{ gdrive_api_key }},
            poster: {{ poster_js }},
            license: {{ license }},
            ads: {{ ads }}
        };"#;

const PLYR_SPEC: VariantSpec = VariantSpec {
    title: "Plyr Video Player",
    head_assets: "\n    <link rel=\"stylesheet\" href=\"https://cdn.plyr.io/3.7.8/plyr.css\" />",
    style_block: r#"        body{margin:0;padding:0}*,:after,:before{box-sizing:border-box}html{overflow-y:scroll}
        body{font-family:'Titillium Web',sans-serif}
        #arsipin,#fluid_video_wrapper_video,body>.plyr{position:absolute;width:100%!important;height:100%!important}
        .jw-button-color:hover,.jw-open,.jw-progress,.jw-toggle,.jw-toggle:hover{color:#008fee!important}
        .jw-active-option{background-color:#008fee!important}
        .plyr{width:100vw;height:100vh}
        .plyr__poster{background-size:cover;background-position:center}"#,
    body: r#"<video id="{{ player_id }}"{{ media_attrs }} crossorigin playsinline poster="{{ poster }}">
        <source src="{{ video_url }}" type="video/mp4" />
    </video>"#,
    library_script: "\n    <script src=\"https://cdn.plyr.io/3.7.8/plyr.polyfilled.js\"></script>",
    init_script: r#"

        const player = new Plyr('#{{ player_id }}', {
            controls: {{ controls_option }},
            autoplay: {{ autoplay }},
            poster: config.poster,
            quality: { default: 720, options: [4320, 2880, 2160, 1440, 1080, 720, 576, 480, 360, 240] }
        });"#,
};

const JWPLAYER_SPEC: VariantSpec = VariantSpec {
    title: "JW Player",
    head_assets: "\n    <script src=\"https://cdn.jwplayer.com/libraries/KB5zFt7A.js\"></script>",
    style_block: r#"        body{margin:0;padding:0}*,:after,:before{box-sizing:border-box}html{overflow-y:scroll}
        body{font-family:'Titillium Web',sans-serif;background:#000}
        .jw-button-color:hover,.jw-open,.jw-progress,.jw-toggle,.jw-toggle:hover{color:#008fee!important}
        .jw-active-option{background-color:#008fee!important}
        #{{ player_id }} { width: 100vw; height: 100vh; }"#,
    body: r#"<div id="{{ player_id }}"></div>"#,
    library_script: "",
    init_script: r##"

        jwplayer({{ player_id_js }}).setup({
            file: {{ video_url_js }},
            image: config.poster,
            width: "100%",
            height: "100vh",
            autostart: {{ autoplay }},
            controls: {{ controls }},
            stretching: "uniform",
            primary: "html5",
            skin: {
                name: "seven",
                color: "#008fee"
            },
            advertising: {
                client: "vast",
                schedule: {
                    "adbreak1": {
                        offset: "pre",
                        tag: config.ads.url
                    }
                }
            }
        });"##,
};

const FLUIDPLAYER_SPEC: VariantSpec = VariantSpec {
    title: "Fluid Player",
    head_assets: "\n    <link rel=\"stylesheet\" href=\"https://cdn.fluidplayer.com/v3/current/fluidplayer.min.css\" />",
    style_block: r#"        body{margin:0;padding:0}*,:after,:before{box-sizing:border-box}html{overflow-y:scroll}
        body{font-family:'Titillium Web',sans-serif;background:#000}
        #arsipin,#fluid_video_wrapper_video,body>.plyr{position:absolute;width:100%!important;height:100%!important}
        video { width: 100vw; height: 100vh; object-fit: contain; }
        .fluid_video_wrapper { position: absolute; width: 100% !important; height: 100% !important; }"#,
    body: r#"<video id="{{ player_id }}"{{ media_attrs }} poster="{{ poster }}">
        <source src="{{ video_url }}" type="video/mp4" />
    </video>"#,
    library_script: "\n    <script src=\"https://cdn.fluidplayer.com/v3/current/fluidplayer.min.js\"></script>",
    init_script: r##"

        fluidPlayer({{ player_id_js }}, {
            layoutControls: {
                autoHide: true,
                controlBar: {
                    autoHideTimeout: 3,
                    animated: true,
                    autoHide: true
                },
                primaryColor: "#008fee"
            },
            vastOptions: {
                adList: [{
                    roll: "preRoll",
                    vastTag: config.ads.url
                }]
            }
        });"##,
};

const HTML5_SPEC: VariantSpec = VariantSpec {
    title: "HTML5 Video Player",
    head_assets: "",
    style_block: r#"        body{margin:0;padding:0}*,:after,:before{box-sizing:border-box}html{overflow-y:scroll}
        body{font-family:'Titillium Web',sans-serif;background:#000}
        video { width: 100vw; height: 100vh; object-fit: contain; }"#,
    body: r#"<video id="{{ player_id }}"{{ media_attrs }} crossorigin playsinline poster="{{ poster }}">
        <source src="{{ video_url }}" type="video/mp4" />
        Your browser does not support the video tag.
    </video>"#,
    library_script: "",
    init_script: "",
};

fn variant_spec(player_type: PlayerType) -> &'static VariantSpec {
    match player_type {
        PlayerType::Plyr => &PLYR_SPEC,
        PlayerType::JwPlayer => &JWPLAYER_SPEC,
        PlayerType::FluidPlayer => &FLUIDPLAYER_SPEC,
        PlayerType::Html5Video => &HTML5_SPEC,
    }
}

/// Renders the complete HTML document for the given context.
///
/// Two renders with identical fields differ only where the element id is
/// interpolated.
pub fn render_document(ctx: &RenderContext<'_>) -> String {
    let spec = variant_spec(ctx.player_type);
    let init_script = format!("{CONFIG_BLOCK}{}", spec.init_script);

    let controls_option = if ctx.controls {
        serde_json::json!([
            "play-large",
            "play",
            "progress",
            "current-time",
            "mute",
            "volume",
            "settings",
            "fullscreen"
        ])
        .to_string()
    } else {
        "false".to_string()
    };

    let ads = &ctx.assets.ads;
    let ads_json = serde_json::json!({
        "title": ads.title,
        "image": ads.image,
        "url": ads.url,
    })
    .to_string();

    // Structural assembly first: every part here is a static template
    // that may itself carry value placeholders.
    let document = DOCUMENT_SHELL
        .replace("{{ title }}", spec.title)
        .replace("{{ head_assets }}", spec.head_assets)
        .replace("{{ style_block }}", spec.style_block)
        .replace("{{ body }}", spec.body)
        .replace("{{ library_script }}", spec.library_script)
        .replace("{{ init_script }}", &init_script);

    interpolate(
        &document,
        &[
            ("media_attrs", media_attrs(ctx)),
            ("poster", escape_attr(&ctx.assets.poster_url)),
            ("poster_js", js_string(&ctx.assets.poster_url)),
            ("player_id", escape_attr(ctx.element_id)),
            ("player_id_js", js_string(ctx.element_id)),
            ("autoplay", bool_literal(ctx.autoplay).to_string()),
            ("controls", bool_literal(ctx.controls).to_string()),
            ("controls_option", controls_option),
            ("gdrive_api_key", js_string(&ctx.assets.gdrive_api_key)),
            ("license", js_string(&ctx.assets.license_id)),
            ("ads", escape_script_text(&ads_json)),
            ("video_url", escape_attr(ctx.video_url)),
            ("video_url_js", js_string(ctx.video_url)),
        ],
    )
}

/// Substitutes `{{ name }}` placeholders in a single left-to-right pass.
///
/// Each value is emitted directly to the output and never rescanned, so
/// placeholder-shaped text inside a substituted value stays literal
/// instead of being rewritten by a later substitution.
fn interpolate(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find("{{ ") {
        let Some(offset) = rest[start..].find(" }}") else {
            break;
        };
        let key = &rest[start + 3..start + offset];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                output.push_str(&rest[..start]);
                output.push_str(value);
                rest = &rest[start + offset + 3..];
            }
            None => {
                // Not a known placeholder; emit the opening braces and
                // keep scanning after them.
                output.push_str(&rest[..start + 3]);
                rest = &rest[start + 3..];
            }
        }
    }

    output.push_str(rest);
    output
}

/// Conditional boolean attributes on the `<video>` element.
fn media_attrs(ctx: &RenderContext<'_>) -> String {
    let mut attrs = String::new();
    if ctx.autoplay {
        attrs.push_str(" autoplay");
    }
    if ctx.controls {
        attrs.push_str(" controls");
    }
    attrs
}

fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Escapes a value for interpolation into an HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serializes a value as a JSON string literal safe for an inline
/// `<script>` block.
pub fn js_string(value: &str) -> String {
    escape_script_text(&serde_json::Value::String(value.to_owned()).to_string())
}

/// Replaces characters that could terminate the surrounding script
/// element (a literal `</script>` inside a string would) with JSON
/// unicode escapes.
fn escape_script_text(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
