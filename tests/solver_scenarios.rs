use layered_cube_solver::{
	apply_move, locate_edge, move_count, new_solved_cube, parse_moves, run_solver, solve,
	slots::{ALL_CORNER_SLOTS, ALL_EDGE_SLOTS, EdgeRing},
	solver::ALL_PHASES,
	tile_color, Color, CornerSlot, Cube, EdgeSlot, Face, Move, Phase, SolveError, SolverLimits, Tile,
};

fn scrambled(notation: &str) -> Cube {
	let mut cube = new_solved_cube();
	cube.apply_all(&parse_moves(notation).unwrap());
	cube
}

fn with_stickers(edit: impl FnOnce(&mut [Color; 54])) -> Cube {
	let mut stickers = *Cube::new().stickers();
	edit(&mut stickers);
	Cube::from_stickers(stickers)
}

#[test_log::test]
fn four_up_turns_are_the_identity() {
	let mut cube = new_solved_cube();
	for _ in 0..4 {
		cube = apply_move(cube, Move::Up);
	}
	assert_eq!(new_solved_cube(), cube);
	assert_eq!(4, move_count(&cube));
}

#[test_log::test]
fn front_then_inverse_is_the_identity() {
	let cube = apply_move(apply_move(new_solved_cube(), Move::Front), Move::FrontS);
	assert_eq!(new_solved_cube(), cube);
}

#[test_log::test]
fn apply_move_leaves_its_input_alone() {
	let before = new_solved_cube();
	let after = apply_move(before, Move::Right);
	assert!(before.is_solved());
	assert_eq!(Color::W, tile_color(&after, Face::Up, 0, 2));
	assert_eq!(Color::B, tile_color(&after, Face::Back, 2, 0));
}

#[test_log::test]
fn six_move_scramble_is_solved() {
	let cube = scrambled("U R F' D L B'");
	let solved = run_solver(cube).unwrap();
	assert_eq!(new_solved_cube(), solved);
	assert_eq!(168, move_count(&solved));
	assert_eq!([20, 14, 44, 22, 62], solved.all_phase_moves());
}

#[test_log::test]
fn every_phase_leaves_its_post_condition() {
	let mut cube = scrambled("R U' F D D B L' U R' F' D B' L U U R");
	let limits = SolverLimits::default();
	for phase in ALL_PHASES {
		phase.run(&mut cube, &limits).unwrap();
		assert!(phase.is_complete(&cube), "{phase}");
	}
	assert!(cube.is_solved());
}

#[test_log::test]
fn top_edge_parity_is_fixed() {
	// yellow and orange top edges swapped, everything else solved
	let cube = scrambled("F U F' U F U U F' U");
	assert!(Phase::MiddleEdges.is_complete(&cube));
	assert!(!Phase::LastCross.is_complete(&cube));
	assert_eq!(Ok(EdgeSlot::TopLeft), locate_edge(&cube, Color::B, Color::Y));
	assert_eq!(Ok(EdgeSlot::TopBack), locate_edge(&cube, Color::B, Color::O));

	let mut cube = cube;
	cube.reset_counters();
	solve(&mut cube).unwrap();
	assert!(cube.is_solved());
	assert_eq!([0, 0, 0, 9, 70], cube.all_phase_moves());
}

#[test_log::test]
fn swapped_top_edges_built_from_stickers() {
	// not reachable by turns alone, the up cross alignment still settles it
	let mut cube = with_stickers(|stickers| {
		stickers[Tile::new(Face::Left, 0, 1).index()] = Color::Y;
		stickers[Tile::new(Face::Back, 0, 1).index()] = Color::O;
	});
	Phase::LastCross.run(&mut cube, &SolverLimits::default()).unwrap();
	assert!(Phase::LastCross.is_complete(&cube));
	for slot in ALL_EDGE_SLOTS.into_iter().filter(|slot| slot.ring() == EdgeRing::Top) {
		assert!(slot.is_solved(&cube), "{slot:?}");
	}
}

#[test_log::test]
fn twisted_top_corners_are_fixed() {
	let mut cube = new_solved_cube();
	let twist = parse_moves("R' D' R D").unwrap();
	cube.apply_all(&twist);
	cube.apply_all(&twist);
	cube.apply(Move::Up);
	for _ in 0..4 {
		cube.apply_all(&twist);
	}
	cube.apply(Move::UpS);
	cube.reset_counters();

	assert!(Phase::LastCross.is_complete(&cube));
	let twisted: Vec<CornerSlot> = ALL_CORNER_SLOTS.into_iter().filter(|slot| !slot.is_solved(&cube)).collect();
	assert_eq!(vec![CornerSlot::TopBackRight, CornerSlot::TopFrontRight], twisted);

	let solved = run_solver(cube).unwrap();
	assert!(solved.is_solved());
	assert_eq!([0, 0, 0, 0, 26], solved.all_phase_moves());
}

#[test_log::test]
fn single_twisted_corner_is_a_fault() {
	// rotate the colors of the up-front-right corner by one third
	let cube = with_stickers(|stickers| {
		let [front, right, up] = CornerSlot::TopFrontRight.tiles().map(Tile::index);
		let (f, r, u) = (stickers[front], stickers[right], stickers[up]);
		stickers[front] = u;
		stickers[right] = f;
		stickers[up] = r;
	});
	assert!(cube.is_well_formed());
	let err = run_solver(cube).unwrap_err();
	assert_eq!(
		SolveError::PostCondition { phase: Phase::LastCorners, detail: "the cube is not solved" },
		err
	);
}

#[test_log::test]
fn repainted_cube_is_malformed() {
	let cube = with_stickers(|stickers| stickers[Tile::new(Face::Front, 1, 0).index()] = Color::Y);
	assert!(matches!(run_solver(cube), Err(SolveError::Malformed { .. })));
}

#[test_log::test]
fn missing_piece_is_reported() {
	// trade a cross sticker for a corner sticker, keeping the color counts
	let cube = with_stickers(|stickers| {
		stickers.swap(Tile::new(Face::Front, 2, 1).index(), Tile::new(Face::Up, 0, 0).index());
	});
	assert!(cube.is_well_formed());
	assert_eq!(
		Err(SolveError::PieceMissing { colors: vec![Color::W, Color::G] }),
		run_solver(cube)
	);
}
