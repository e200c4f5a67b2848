pub mod board {
    use colored::Colorize;
    use crate::board::Board;
    use crate::heuristic::tile_distance;
    use crate::tile::Rune;

    pub trait DebugPrintable {
        fn render(&self, manhattan_distance: bool) -> String;

        fn debug_print(&self, manhattan_distance: bool) {
            print!("{}", self.render(manhattan_distance));
        }
    }

    impl DebugPrintable for Board {
        /// Box-drawn board. With `manhattan_distance` each tile shows how far
        /// it is from its goal cell instead of its label.
        fn render(&self, manhattan_distance: bool) -> String {
            let width = self.dimension;
            let mut out = String::new();

            let rule = |out: &mut String, left: &str, mid: &str, right: &str| {
                out.push_str(left);
                for col in 0..width {
                    out.push_str("───");
                    if col < width - 1 {
                        out.push_str(mid);
                    }
                }
                out.push_str(right);
                out.push('\n');
            };

            rule(&mut out, "┌", "┬", "┐");

            for row in 0..width {
                out.push('│');
                for col in 0..width {
                    let tile = self.tile_at(col, row);
                    let cell = match tile.rune {
                        Rune::SPACE => " ".on_green().to_string(),
                        Rune::VALUE if manhattan_distance => {
                            let distance = tile_distance(tile, col, row, width);
                            if distance == 0 {
                                distance.to_string().green().to_string()
                            } else {
                                distance.to_string().yellow().to_string()
                            }
                        }
                        Rune::VALUE => tile.raw.to_string(),
                    };
                    out.push_str(&format!(" {} │", cell));
                }
                out.push('\n');

                if row < width - 1 {
                    rule(&mut out, "├", "┼", "┤");
                }
            }

            rule(&mut out, "└", "┴", "┘");

            out
        }
    }
}
