use crate::error::{CoreError, CoreResult};
use log::warn;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Weight of a cell that nobody has weighted.
pub const DEFAULT_WEIGHT: u32 = 1;

/// One cell of the grid.
///
/// `adjacent` is kept in sync by every [`Grid`] method that changes a wall,
/// so it always lists the in-bounds, non-wall neighbours in the order right,
/// up, left, down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub position: Position,
    pub weight: u32,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub has_user_weight: bool,
    adjacent: Vec<Position>,
}

impl Node {
    fn new(position: Position) -> Self {
        Node {
            position,
            weight: DEFAULT_WEIGHT,
            is_start: false,
            is_end: false,
            is_wall: false,
            has_user_weight: false,
            adjacent: Vec::with_capacity(4),
        }
    }

    pub fn adjacent(&self) -> &[Position] {
        &self.adjacent
    }
}

/// A rectangular grid of weighted cells with exactly one start and one end.
///
/// Nodes live in a flat row-major arena; [`Grid::index_of`] and
/// [`Grid::position_of`] convert between coordinates and arena indices so the
/// algorithms can keep their bookkeeping in plain vectors.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Position,
    end: Position,
}

impl Grid {
    /// Creates a grid with the start in the top-left corner, the end in the
    /// bottom-right corner and no walls or weights.
    pub fn new(rows: usize, cols: usize) -> CoreResult<Self> {
        if rows == 0 || cols == 0 || rows * cols < 2 {
            return Err(CoreError::InvalidDimensions { rows, cols });
        }

        let mut nodes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node::new(Position::new(row, col)));
            }
        }

        let mut grid = Grid {
            rows,
            cols,
            nodes,
            start: Position::new(0, 0),
            end: Position::new(rows - 1, cols - 1),
        };
        grid.reset();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn flat(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| self.flat(pos))
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub fn node(&self, pos: Position) -> Option<&Node> {
        self.index_of(pos).map(|index| &self.nodes[index])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn node_mut(&mut self, pos: Position) -> CoreResult<&mut Node> {
        match self.index_of(pos) {
            Some(index) => Ok(&mut self.nodes[index]),
            None => Err(CoreError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            }),
        }
    }

    pub fn get_start_and_end_node_coords(&self) -> (Position, Position) {
        (self.start, self.end)
    }

    /// In-bounds, non-wall neighbours of `pos` (right, up, left, down).
    /// Out-of-bounds positions have no neighbours.
    pub fn get_valid_adjacent_nodes(&self, pos: Position) -> &[Position] {
        match self.node(pos) {
            Some(node) => node.adjacent(),
            None => &[],
        }
    }

    fn neighbours_in_bounds(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let right = Some(Position::new(pos.row, pos.col + 1));
        let up = pos.row.checked_sub(1).map(|row| Position::new(row, pos.col));
        let left = pos.col.checked_sub(1).map(|col| Position::new(pos.row, col));
        let down = Some(Position::new(pos.row + 1, pos.col));
        [right, up, left, down]
            .into_iter()
            .flatten()
            .filter(move |candidate| self.contains(*candidate))
    }

    fn compute_adjacency(&self, pos: Position) -> Vec<Position> {
        self.neighbours_in_bounds(pos)
            .filter(|candidate| !self.is_wall(*candidate))
            .collect()
    }

    /// Recomputes the adjacency list of every node.
    pub fn rebuild_adjacency(&mut self) {
        for index in 0..self.nodes.len() {
            let adjacency = self.compute_adjacency(self.position_of(index));
            self.nodes[index].adjacent = adjacency;
        }
    }

    /// Recomputes adjacency for `pos` and the cells that can see it.
    fn refresh_adjacency_around(&mut self, pos: Position) {
        let mut affected: Vec<Position> = self.neighbours_in_bounds(pos).collect();
        affected.push(pos);
        for cell in affected {
            let adjacency = self.compute_adjacency(cell);
            let index = self.flat(cell);
            self.nodes[index].adjacent = adjacency;
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.node(pos).is_some_and(|node| node.is_wall)
    }

    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_wall).count()
    }

    /// Marks or clears a wall. A wall replaces any user weight on the cell.
    ///
    /// Returns `Ok(false)` when asked to wall the start or the end.
    pub fn set_wall(&mut self, pos: Position, wall: bool) -> CoreResult<bool> {
        let node = self.node_mut(pos)?;
        if wall && (node.is_start || node.is_end) {
            warn!("refusing to place a wall on endpoint {:?}", pos);
            return Ok(false);
        }
        if node.is_wall == wall {
            return Ok(true);
        }
        node.is_wall = wall;
        if wall {
            node.has_user_weight = false;
            node.weight = DEFAULT_WEIGHT;
        }
        self.refresh_adjacency_around(pos);
        Ok(true)
    }

    pub fn get_weight_at_node(&self, pos: Position) -> Option<u32> {
        self.node(pos).map(|node| node.weight)
    }

    /// Sets a cell's weight.
    ///
    /// Cells carrying a user-defined weight keep it unless `override_user` is
    /// set, and the start always keeps weight 0. Returns whether the weight
    /// was written.
    pub fn set_weight_at_node(
        &mut self,
        pos: Position,
        weight: u32,
        override_user: bool,
    ) -> CoreResult<bool> {
        let node = self.node_mut(pos)?;
        if node.is_start || (node.has_user_weight && !override_user) {
            return Ok(false);
        }
        node.weight = weight;
        Ok(true)
    }

    /// Gives a cell a user-defined weight, clearing any wall on it.
    pub fn set_user_weight(&mut self, pos: Position, weight: u32) -> CoreResult<bool> {
        let node = self.node_mut(pos)?;
        if node.is_start {
            warn!("refusing to weight the start node {:?}", pos);
            return Ok(false);
        }
        let was_wall = node.is_wall;
        node.is_wall = false;
        node.has_user_weight = true;
        node.weight = weight;
        if was_wall {
            self.refresh_adjacency_around(pos);
        }
        Ok(true)
    }

    pub fn clear_user_weight(&mut self, pos: Position) -> CoreResult<()> {
        let node = self.node_mut(pos)?;
        if node.has_user_weight {
            node.has_user_weight = false;
            node.weight = DEFAULT_WEIGHT;
        }
        Ok(())
    }

    /// Resets every weight that was not set by the user back to 1, then
    /// re-zeroes the start.
    pub fn reset_non_user_weights(&mut self) {
        for node in self.nodes.iter_mut().filter(|node| !node.has_user_weight) {
            node.weight = DEFAULT_WEIGHT;
        }
        let start = self.flat(self.start);
        self.nodes[start].weight = 0;
    }

    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut() {
            node.is_wall = false;
        }
        self.rebuild_adjacency();
    }

    /// Drops user weights as well as generated ones.
    pub fn clear_weights(&mut self) {
        for node in self.nodes.iter_mut() {
            node.has_user_weight = false;
        }
        self.reset_non_user_weights();
    }

    /// Relocates the start. The old start goes back to weight 1; the new one
    /// loses any wall or user weight and gets weight 0.
    pub fn move_start(&mut self, pos: Position) -> CoreResult<()> {
        self.node_mut(pos)?;
        if pos == self.end {
            return Err(CoreError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if pos == self.start {
            return Ok(());
        }

        let old = self.flat(self.start);
        self.nodes[old].is_start = false;
        self.nodes[old].weight = DEFAULT_WEIGHT;

        let new = self.flat(pos);
        let was_wall = self.nodes[new].is_wall;
        let node = &mut self.nodes[new];
        node.is_start = true;
        node.is_wall = false;
        node.has_user_weight = false;
        node.weight = 0;
        self.start = pos;
        if was_wall {
            self.refresh_adjacency_around(pos);
        }
        Ok(())
    }

    /// Relocates the end, clearing any wall on the target cell.
    pub fn move_end(&mut self, pos: Position) -> CoreResult<()> {
        self.node_mut(pos)?;
        if pos == self.start {
            return Err(CoreError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        if pos == self.end {
            return Ok(());
        }

        let old = self.flat(self.end);
        self.nodes[old].is_end = false;

        let new = self.flat(pos);
        let was_wall = self.nodes[new].is_wall;
        self.nodes[new].is_end = true;
        self.nodes[new].is_wall = false;
        self.end = pos;
        if was_wall {
            self.refresh_adjacency_around(pos);
        }
        Ok(())
    }

    /// Back to the freshly created layout: start top-left, end bottom-right,
    /// no walls, no weights.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            let position = node.position;
            *node = Node::new(position);
        }
        self.start = Position::new(0, 0);
        self.end = Position::new(self.rows - 1, self.cols - 1);
        self.nodes[0].is_start = true;
        self.nodes[0].weight = 0;
        let end = self.flat(self.end);
        self.nodes[end].is_end = true;
        self.rebuild_adjacency();
    }

    /// Total cost of walking `path`: the weight of every node entered after
    /// the first.
    pub fn path_weight(&self, path: &[Position]) -> u64 {
        path.iter()
            .skip(1)
            .filter_map(|pos| self.get_weight_at_node(*pos))
            .map(u64::from)
            .sum()
    }

    /// Text rendering with an optional overlay of checked and path cells.
    ///
    /// `S`/`E` mark the endpoints, `#` walls, `*` path cells, `.` checked
    /// cells, digits weights above 1 (`+` for weights of 10 and more) and
    /// `_` everything else.
    pub fn render(&self, checked: &[Position], path: &[Position]) -> String {
        let mut marks = vec![None; self.nodes.len()];
        for pos in checked {
            if let Some(index) = self.index_of(*pos) {
                marks[index] = Some('.');
            }
        }
        for pos in path {
            if let Some(index) = self.index_of(*pos) {
                marks[index] = Some('*');
            }
        }

        let mut out = String::with_capacity((self.cols * 2 + 5) * (self.rows + 1));
        out.push_str("   ");
        for col in 0..self.cols {
            out.push_str(&format!("{:2}", col % 10));
        }
        out.push('\n');

        for row in 0..self.rows {
            out.push_str(&format!("{:2} ", row));
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let node = &self.nodes[index];
                let glyph = if node.is_start {
                    'S'
                } else if node.is_end {
                    'E'
                } else if node.is_wall {
                    '#'
                } else if let Some(mark) = marks[index] {
                    mark
                } else {
                    match node.weight {
                        0 | 1 => '_',
                        w @ 2..=9 => char::from_digit(w, 10).unwrap_or('+'),
                        _ => '+',
                    }
                };
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[], &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_grid_layout() {
        let grid = Grid::new(3, 4).unwrap();
        let (start, end) = grid.get_start_and_end_node_coords();
        assert_eq!(start, pos(0, 0));
        assert_eq!(end, pos(2, 3));
        assert_eq!(grid.get_weight_at_node(start), Some(0));
        assert_eq!(grid.get_weight_at_node(end), Some(1));
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert_eq!(
            Grid::new(1, 1).unwrap_err(),
            CoreError::InvalidDimensions { rows: 1, cols: 1 }
        );
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn test_adjacency_order_and_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.get_valid_adjacent_nodes(pos(1, 1)),
            &[pos(1, 2), pos(0, 1), pos(1, 0), pos(2, 1)]
        );
        assert_eq!(grid.get_valid_adjacent_nodes(pos(0, 0)), &[pos(0, 1), pos(1, 0)]);
        assert!(grid.get_valid_adjacent_nodes(pos(9, 9)).is_empty());
    }

    #[test]
    fn test_wall_updates_neighbour_adjacency() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.set_wall(pos(1, 1), true), Ok(true));
        assert!(!grid.get_valid_adjacent_nodes(pos(0, 1)).contains(&pos(1, 1)));
        assert!(!grid.get_valid_adjacent_nodes(pos(1, 0)).contains(&pos(1, 1)));

        grid.set_wall(pos(1, 1), false).unwrap();
        assert!(grid.get_valid_adjacent_nodes(pos(0, 1)).contains(&pos(1, 1)));
    }

    #[test]
    fn test_endpoints_cannot_be_walled() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.set_wall(pos(0, 0), true), Ok(false));
        assert_eq!(grid.set_wall(pos(2, 2), true), Ok(false));
        assert_eq!(grid.wall_count(), 0);
        assert_eq!(
            grid.set_wall(pos(3, 0), true),
            Err(CoreError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_wall_and_user_weight_are_exclusive() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_user_weight(pos(1, 1), 7).unwrap();
        grid.set_wall(pos(1, 1), true).unwrap();
        let node = grid.node(pos(1, 1)).unwrap();
        assert!(node.is_wall);
        assert!(!node.has_user_weight);
        assert_eq!(node.weight, DEFAULT_WEIGHT);

        grid.set_user_weight(pos(1, 1), 4).unwrap();
        let node = grid.node(pos(1, 1)).unwrap();
        assert!(!node.is_wall);
        assert!(node.has_user_weight);
        assert!(grid.get_valid_adjacent_nodes(pos(0, 1)).contains(&pos(1, 1)));
    }

    #[test]
    fn test_user_weight_survives_non_override_writes() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_user_weight(pos(0, 2), 9).unwrap();
        assert_eq!(grid.set_weight_at_node(pos(0, 2), 50, false), Ok(false));
        assert_eq!(grid.get_weight_at_node(pos(0, 2)), Some(9));
        assert_eq!(grid.set_weight_at_node(pos(0, 2), 50, true), Ok(true));
        assert_eq!(grid.get_weight_at_node(pos(0, 2)), Some(50));

        assert_eq!(grid.set_weight_at_node(pos(0, 0), 5, true), Ok(false));
        assert_eq!(grid.get_weight_at_node(pos(0, 0)), Some(0));
    }

    #[test]
    fn test_reset_non_user_weights() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_weight_at_node(pos(1, 1), 30, false).unwrap();
        grid.set_user_weight(pos(2, 0), 5).unwrap();
        grid.reset_non_user_weights();
        assert_eq!(grid.get_weight_at_node(pos(1, 1)), Some(1));
        assert_eq!(grid.get_weight_at_node(pos(2, 0)), Some(5));
        assert_eq!(grid.get_weight_at_node(pos(0, 0)), Some(0));

        grid.clear_weights();
        assert_eq!(grid.get_weight_at_node(pos(2, 0)), Some(1));
    }

    #[test]
    fn test_move_start_keeps_single_start() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_wall(pos(1, 1), true).unwrap();
        grid.move_start(pos(1, 1)).unwrap();

        assert_eq!(grid.get_start_and_end_node_coords().0, pos(1, 1));
        assert_eq!(grid.nodes().filter(|node| node.is_start).count(), 1);
        assert_eq!(grid.get_weight_at_node(pos(1, 1)), Some(0));
        assert_eq!(grid.get_weight_at_node(pos(0, 0)), Some(1));
        assert!(!grid.is_wall(pos(1, 1)));
        assert!(grid.get_valid_adjacent_nodes(pos(0, 1)).contains(&pos(1, 1)));

        assert_eq!(
            grid.move_start(pos(2, 2)),
            Err(CoreError::Occupied { row: 2, col: 2 })
        );
    }

    #[test]
    fn test_move_end_and_reset() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.move_end(pos(0, 3)).unwrap();
        grid.set_wall(pos(2, 2), true).unwrap();
        assert_eq!(grid.nodes().filter(|node| node.is_end).count(), 1);
        assert_eq!(grid.move_end(pos(0, 0)), Err(CoreError::Occupied { row: 0, col: 0 }));

        grid.reset();
        assert_eq!(
            grid.get_start_and_end_node_coords(),
            (pos(0, 0), pos(3, 3))
        );
        assert_eq!(grid.wall_count(), 0);
        assert_eq!(grid.nodes().filter(|node| node.is_end).count(), 1);
    }

    #[test]
    fn test_path_weight_skips_first_node() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_user_weight(pos(0, 1), 4).unwrap();
        let path = [pos(0, 0), pos(0, 1), pos(0, 2), pos(1, 2)];
        assert_eq!(grid.path_weight(&path), 4 + 1 + 1);
    }

    #[test]
    fn test_render_marks_cells() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_wall(pos(1, 0), true).unwrap();
        let text = grid.render(&[pos(0, 1)], &[pos(0, 2)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], " 0  S . *");
        assert_eq!(lines[2], " 1  # _ E");
    }
}
