use getcall::registry::Registry;
use getcall::rewrite::RewriteOptions;
use getcall::{process, process_with_options};

#[test]
fn rewrites_known_chain_head_outside_literals() {
    let registry = Registry::from_names(["x"]);
    assert_eq!(
        process("x.y + \"x.\"", &registry),
        "this.get('x').y + \"x.\""
    );
}

#[test]
fn legacy_mode_matches_the_unfiltered_tool() {
    let registry = Registry::from_names(["x"]);
    let opts = RewriteOptions {
        rewrite_inside_literals: true,
    };
    assert_eq!(
        process_with_options("x.y + \"x.\"", &registry, &opts),
        "this.get('x').y + \"this.get('x').\""
    );
}

#[test]
fn text_without_known_identifiers_round_trips() {
    let registry = Registry::from_names(["player", "hud"]);
    let src = "score.add(1) // nothing known here\nname.first = 'a.b'\n";
    assert_eq!(process(src, &registry), src);
}

#[test]
fn realistic_script_only_touches_code() {
    let registry = Registry::from_names(["player", "hud"]);
    let src = "\
// player.spawn is documented at player.md\n\
player.spawn('north')\n\
hud.text = \"player.health low\"\n\
/* hud.flash(player.pos) is disabled */\n\
npc.greet(player.name)\n";
    let want = "\
// player.spawn is documented at player.md\n\
this.get('player').spawn('north')\n\
this.get('hud').text = \"player.health low\"\n\
/* hud.flash(player.pos) is disabled */\n\
npc.greet(this.get('player').name)\n";
    assert_eq!(process(src, &registry), want);
}

#[test]
fn chains_only_prefix_their_head() {
    let registry = Registry::from_names(["scene", "camera"]);
    assert_eq!(
        process("scene.camera.zoom = 2", &registry),
        "this.get('scene').get('camera').zoom = 2"
    );
}

#[test]
fn unterminated_trailing_string_is_visible_to_the_rewriter() {
    // the region never closes, so no span shields it.
    let registry = Registry::from_names(["x"]);
    assert_eq!(process("\"x.", &registry), "\"this.get('x').");
}

#[test]
fn processing_its_own_output_is_stable() {
    let registry = Registry::from_names(["x"]);
    let once = process("x.y + \"x.\"", &registry);
    let twice = process(&once, &registry);
    assert_eq!(once, twice);
}
