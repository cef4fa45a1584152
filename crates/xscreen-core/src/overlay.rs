//! Rotate-prompt overlay styles and markup

use xscreen_hal::{TIP_CLASS, TIP_SHOW_CLASS};

/// Stylesheet block for the overlay with DOM id `id`
///
/// The overlay is a dark full-screen layer, hidden until the show class is
/// added, fading in over 0.3s. The icon swings between upright and a
/// quarter turn through the `phone_rotate` keyframes.
pub fn tip_stylesheet(id: &str, z_index: i32) -> String {
    format!(
        "#{id}.{tip} {{
  transition: opacity linear 0.3s;
  pointer-events: none;
  visibility: hidden;
  opacity: 0;
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background: rgba(0,0,0, 0.8);
  z-index: {z_index};
}}
#{id}.{tip}.{show} {{
  visibility: visible;
  opacity: 1;
  pointer-events: auto;
}}
#{id} .{tip}_inner {{
  position: absolute;
  top: 50%;
  left: 50%;
  -webkit-transform: translate(-50%, -50%);
  transform: translate(-50%, -50%);
}}
#{id} .{tip}_icon {{
  margin: 1.5rem auto;
  display: block;
  width: 5rem;
  animation: phone_rotate 1.6s ease-in infinite;
}}
#{id} .{tip}_icon img {{
  width: 100%;
}}
#{id} .{tip}_text {{
  white-space: nowrap;
  font-size: 0.75rem;
  text-align: center;
  color: #fff;
}}
@keyframes phone_rotate {{
  0%, 20% {{
    transform: rotate(0deg);
  }}
  50%, 70% {{
    transform: rotate(-90deg);
  }}
  100% {{
    transform: rotate(0deg);
  }}
}}
",
        tip = TIP_CLASS,
        show = TIP_SHOW_CLASS,
    )
}

/// Inner markup of an overlay: the logo above the caption
///
/// `text` is inserted as-is and may carry markup of its own.
pub fn tip_markup(text: &str, logo_src: &str) -> String {
    format!(
        "<div class='{tip}_inner'><i class='{tip}_icon'><img src='{src}'></i><p class='{tip}_text'>{text}</p></div>",
        tip = TIP_CLASS,
        src = logo_src.replace('\'', "%27"),
    )
}
