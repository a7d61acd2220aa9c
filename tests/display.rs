//! End-to-end behaviour of the driver and renderer over a recording transport

mod common;

use common::{clear, log, ready};
use st7789_tft::st7789::cmd::Cmd;
use st7789_tft::{
    BiColor, BitmapSource, Color, Cursor, Error, PanelConfig, PixelDepth, PowerState, Rotation,
    ScrollDirection,
};

#[test]
fn full_screen_window_for_every_rotation() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X320)?;
    for rotation in Rotation::ALL {
        tft.set_rotation(rotation)?;
        clear(&mut tft);
        tft.fill_screen(Color::BLACK)?;

        let (cols, rows): (u16, u16) = if rotation.swaps_axes() {
            (320, 240)
        } else {
            (240, 320)
        };
        let col_end = (cols - 1).to_be_bytes();
        let row_end = (rows - 1).to_be_bytes();
        assert_eq!(
            log(&tft).params_of(Cmd::CASET),
            vec![vec![0, 0, col_end[0], col_end[1]]],
            "{rotation:?}"
        );
        assert_eq!(
            log(&tft).params_of(Cmd::RASET),
            vec![vec![0, 0, row_end[0], row_end[1]]],
            "{rotation:?}"
        );
    }
    Ok(())
}

#[test]
fn pure_channels_convert_exactly() {
    assert_eq!(Color::from_rgb888(0xFF, 0, 0).raw(), 0xF800);
    assert_eq!(Color::from_rgb888(0, 0xFF, 0).raw(), 0x07E0);
    assert_eq!(Color::from_rgb888(0, 0, 0xFF).raw(), 0x001F);
}

#[test]
fn bottom_up_decode_and_buffer_size() -> anyhow::Result<()> {
    // 2x2 at 24 bpp behind a 4 byte header, stored bottom row first
    let mut data = vec![0xEE; 4];
    data.extend_from_slice(&[0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF]); // bottom: red, red
    data.extend_from_slice(&[0xFF, 0x00, 0x00, 0xFF, 0x00, 0x00]); // top: blue, blue

    let source = BitmapSource::new(&data, 2, 2, PixelDepth::Rgb888).with_header_offset(4);
    let pixels: Vec<Color> = source.decode(BiColor::default())?.collect();
    assert_eq!(pixels, vec![Color::BLUE, Color::BLUE, Color::RED, Color::RED]);

    let short = BitmapSource::new(&data[..data.len() - 1], 2, 2, PixelDepth::Rgb888)
        .with_header_offset(4);
    assert_eq!(
        short.decode(BiColor::default()).unwrap_err(),
        Error::BufferTooSmall {
            needed: 16,
            actual: 15
        }
    );
    Ok(())
}

#[test]
fn out_of_bounds_rect_never_reaches_the_bus() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X280)?;
    assert_eq!(
        tft.fill_rect(200, 270, 41, 5, Color::RED),
        Err(Error::OutOfBounds)
    );
    assert_eq!(
        tft.draw_bitmap16(239, 279, 2, 1, &[Color::RED, Color::RED]),
        Err(Error::OutOfBounds)
    );
    assert!(log(&tft).is_empty());
    Ok(())
}

#[test]
fn rotation_then_fill_screen_streams_exact_pixel_count() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_135X240)?;
    tft.set_rotation(Rotation::Deg90)?;
    assert_eq!(log(&tft).commands(), vec![Cmd::MADCTL]);
    clear(&mut tft);

    tft.fill_screen(Color::WHITE)?;
    let recorder = log(&tft);
    assert_eq!(recorder.params_of(Cmd::CASET).len(), 1);
    assert_eq!(recorder.params_of(Cmd::RASET).len(), 1);
    assert_eq!(recorder.pixel_count(), 240 * 135);
    Ok(())
}

#[test]
fn string_with_unsupported_character() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X320)?;
    tft.write_char_string(12, 20, &[b'O', 0x19, b'K'])?;
    let ram_writes = log(&tft)
        .commands()
        .into_iter()
        .filter(|cmd| *cmd == Cmd::RAMWR)
        .count();
    assert_eq!(ram_writes, 2);
    assert_eq!(tft.cursor(), Cursor::new(12 + 3 * 6, 20));
    Ok(())
}

#[test]
fn power_down_then_reinitialize() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X240)?;
    tft.driver_mut().power_down()?;
    assert_eq!(tft.driver().state(), PowerState::Uninitialized);
    assert_eq!(tft.draw_pixel(0, 0, Color::RED), Err(Error::NotReady));
    assert_eq!(tft.print("x"), Err(Error::NotReady));

    tft.initialize()?;
    assert_eq!(tft.driver().state(), PowerState::Active);
    tft.draw_pixel(0, 0, Color::RED)?;
    tft.print("x")?;
    Ok(())
}

#[test]
fn sleep_blocks_drawing_until_wake() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X320)?;
    tft.driver_mut().sleep(true)?;
    assert_eq!(tft.fill_screen(Color::RED), Err(Error::NotReady));
    tft.driver_mut().sleep(false)?;
    tft.fill_screen(Color::RED)?;
    Ok(())
}

#[test]
fn scroll_commands() -> anyhow::Result<()> {
    let mut tft = ready(PanelConfig::ST7789_240X320)?;
    tft.driver_mut()
        .set_scroll_region(0, 0, ScrollDirection::TopToBottom)?;
    tft.driver_mut().scroll_to(160)?;
    let recorder = log(&tft);
    assert_eq!(
        recorder.params_of(Cmd::VSCRDEF),
        vec![vec![0x00, 0x00, 0x01, 0x40, 0x00, 0x00]]
    );
    assert_eq!(recorder.params_of(Cmd::VSCRSADD), vec![vec![0x00, 0xA0]]);
    assert_eq!(tft.driver_mut().scroll_to(320), Err(Error::OutOfBounds));
    Ok(())
}

#[test]
fn text_and_graphics_share_the_window_path() -> anyhow::Result<()> {
    use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::Text;

    let mut tft = ready(PanelConfig::ST7789_240X320)?;
    let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
    Text::new("Hi", Point::new(0, 10), style).draw(&mut tft)?;
    assert!(log(&tft).pixel_count() > 0);
    Ok(())
}
