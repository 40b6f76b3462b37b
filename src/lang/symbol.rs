use super::Token;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<SymbolTable> = Lazy::new(|| {
    let table = SymbolTable::from_entries(BUILTIN_ENTRIES.iter().cloned());
    tracing::debug!("built-in symbol table ready with {} entries", table.len());
    table
});

/// The name of the terminal function. At indentation zero it ends a script.
pub const END: &str = "End";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Function,
    Variable,
    Constant,
    Operator,
}

impl Kind {
    /// Largest value an instruction word can hold for a symbol of this
    /// kind. Variables also appear as operands, so they share the
    /// constant payload limit.
    pub fn max_value(self) -> i32 {
        match self {
            Kind::Function => 0x07FF_FFFF,
            Kind::Variable | Kind::Constant => Token::MAX_VALUE,
            Kind::Operator => 0xFF,
        }
    }

    pub fn fits(self, value: i32) -> bool {
        (0..=self.max_value()).contains(&value)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Function => write!(f, "FUNCTION"),
            Variable => write!(f, "VARIABLE"),
            Constant => write!(f, "CONSTANT"),
            Operator => write!(f, "OPERATOR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: Kind,
    pub value: i32,
}

impl Symbol {
    pub fn new(name: &str, kind: Kind, value: i32) -> Symbol {
        Symbol {
            name: name.to_string(),
            kind,
            value,
        }
    }
}

/// ## Opcode names
///
/// Immutable after construction. Lookups are exact and case-sensitive.
/// A later entry with a duplicate name replaces the earlier one.

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
    by_name: HashMap<String, usize>,
    by_value: HashMap<(Kind, i32), usize>,
}

impl SymbolTable {
    pub fn builtin() -> &'static SymbolTable {
        &BUILTIN
    }

    pub fn from_entries<I: IntoIterator<Item = (&'static str, Kind, i32)>>(entries: I) -> SymbolTable {
        SymbolTable::from_symbols(
            entries
                .into_iter()
                .map(|(name, kind, value)| Symbol::new(name, kind, value)),
        )
    }

    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> SymbolTable {
        let mut table = SymbolTable::default();
        for symbol in symbols {
            match table.by_name.get(&symbol.name) {
                Some(&index) => table.entries[index] = symbol,
                None => {
                    table.by_name.insert(symbol.name.clone(), table.entries.len());
                    table.entries.push(symbol);
                }
            }
        }
        for (index, symbol) in table.entries.iter().enumerate() {
            table.by_value.entry((symbol.kind, symbol.value)).or_insert(index);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index_of(name).and_then(|index| self.entries.get(index))
    }

    pub fn entry(&self, index: usize) -> Option<&Symbol> {
        self.entries.get(index)
    }

    /// Reverse lookup used by listings. The first entry registered for a
    /// (kind, value) pair wins.
    pub fn name_of(&self, kind: Kind, value: i32) -> Option<&str> {
        self.by_value
            .get(&(kind, value))
            .and_then(|&index| self.entries.get(index))
            .map(|s| s.name.as_str())
    }

    pub fn end(&self) -> Option<&Symbol> {
        self.get(END).filter(|s| s.kind == Kind::Function)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.entries.iter()
    }
}

use Kind::{Constant as C, Function as F, Operator as O, Variable as V};

#[rustfmt::skip]
const BUILTIN_ENTRIES: &[(&str, Kind, i32)] = &[
    ("IfSpawned", F, 0),
    ("IfTimeOut", F, 1),
    ("IfAtWaypoint", F, 2),
    ("IfAtLastWaypoint", F, 3),
    ("IfAttacked", F, 4),
    ("IfBumped", F, 5),
    ("IfOrdered", F, 6),
    ("IfCalledForHelp", F, 7),
    ("SetContent", F, 8),
    ("IfKilled", F, 9),
    ("IfTargetKilled", F, 10),
    ("ClearWaypoints", F, 11),
    ("AddWaypoint", F, 12),
    ("FindPath", F, 13),
    ("Compass", F, 14),
    ("GetTargetArmorPrice", F, 15),
    ("SetTime", F, 16),
    ("GetContent", F, 17),
    ("JoinTargetTeam", F, 18),
    ("SetTargetToNearbyEnemy", F, 19),
    ("SetTargetToTargetLeftHand", F, 20),
    ("SetTargetToTargetRightHand", F, 21),
    ("SetTargetToWhoeverAttacked", F, 22),
    ("SetTargetToWhoeverBumped", F, 23),
    ("SetTargetToWhoeverCalledForHelp", F, 24),
    ("SetTargetToOldTarget", F, 25),
    ("SetTurnModeToVelocity", F, 26),
    ("SetTurnModeToWatch", F, 27),
    ("SetTurnModeToSpin", F, 28),
    ("SetBumpHeight", F, 29),
    ("IfTargetHasID", F, 30),
    ("IfTargetHasItemID", F, 31),
    ("IfTargetHoldingItemID", F, 32),
    ("IfTargetHasSkillID", F, 33),
    ("Else", F, 34),
    ("Run", F, 35),
    ("Walk", F, 36),
    ("Sneak", F, 37),
    ("DoAction", F, 38),
    ("KeepAction", F, 39),
    ("IssueOrder", F, 40),
    ("DropWeapons", F, 41),
    ("TargetDoAction", F, 42),
    ("OpenPassage", F, 43),
    ("ClosePassage", F, 44),
    ("IfPassageOpen", F, 45),
    ("GoPoof", F, 46),
    ("CostTargetItemID", F, 47),
    ("DoActionOverride", F, 48),
    ("IfHealed", F, 49),
    ("SendMessage", F, 50),
    ("CallForHelp", F, 51),
    ("AddIDSZ", F, 52),
    ("End", F, 53),
    ("IfStateIs", F, 54),
    ("IfTargetCanOpenStuff", F, 55),
    ("IfGrabbed", F, 56),
    ("IfDropped", F, 57),
    ("SetTargetToWhoeverIsHolding", F, 58),
    ("DamageTarget", F, 59),
    ("IfXIsLessThanY", F, 60),
    ("SetWeatherTime", F, 61),
    ("GetBumpHeight", F, 62),
    ("IfReaffirmed", F, 63),
    ("UnkeepAction", F, 64),
    ("IfTargetIsOnOtherTeam", F, 65),
    ("IfTargetIsOnHatedTeam", F, 66),
    ("PressLatchButton", F, 67),
    ("SetTargetToTargetOfLeader", F, 68),
    ("IfLeaderKilled", F, 69),
    ("BecomeLeader", F, 70),
    ("ChangeTargetArmor", F, 71),
    ("GiveMoneyToTarget", F, 72),
    ("DropKeys", F, 73),
    ("IfLeaderIsAlive", F, 74),
    ("IfTargetIsOldTarget", F, 75),
    ("SetTargetToLeader", F, 76),
    ("SpawnCharacter", F, 77),
    ("RespawnCharacter", F, 78),
    ("ChangeTile", F, 79),
    ("IfUsed", F, 80),
    ("DropMoney", F, 81),
    ("SetOldTarget", F, 82),
    ("DetachFromHolder", F, 83),
    ("IfTargetHasVulnerabilityID", F, 84),
    ("CleanUp", F, 85),
    ("IfCleanedUp", F, 86),
    ("IfSitting", F, 87),
    ("IfTargetIsHurt", F, 88),
    ("IfTargetIsAPlayer", F, 89),
    ("PlaySound", F, 90),
    ("SpawnParticle", F, 91),
    ("IfTargetIsAlive", F, 92),
    ("Stop", F, 93),
    ("DisaffirmCharacter", F, 94),
    ("ReaffirmCharacter", F, 95),
    ("IfTargetIsSelf", F, 96),
    ("IfTargetIsMale", F, 97),
    ("IfTargetIsFemale", F, 98),
    ("SetTargetToSelf", F, 99),
    ("SetTargetToRider", F, 100),
    ("GetAttackTurn", F, 101),
    ("GetDamageType", F, 102),
    ("BecomeSpell", F, 103),
    ("BecomeSpellbook", F, 104),
    ("IfScoredAHit", F, 105),
    ("IfDisaffirmed", F, 106),
    ("TranslateOrder", F, 107),
    ("SetTargetToWhoeverWasHit", F, 108),
    ("SetTargetToWideEnemy", F, 109),
    ("IfChanged", F, 110),
    ("IfInWater", F, 111),
    ("IfBored", F, 112),
    ("IfTooMuchBaggage", F, 113),
    ("IfGrogged", F, 114),
    ("IfDazed", F, 115),
    ("IfTargetHasSpecialID", F, 116),
    ("PressTargetLatchButton", F, 117),
    ("IfInvisible", F, 118),
    ("IfArmorIs", F, 119),
    ("GetTargetGrogTime", F, 120),
    ("GetTargetDazeTime", F, 121),
    ("SetDamageType", F, 122),
    ("SetWaterLevel", F, 123),
    ("EnchantTarget", F, 124),
    ("EnchantChild", F, 125),
    ("TeleportTarget", F, 126),
    ("GiveExperienceToTarget", F, 127),
    ("IncreaseAmmo", F, 128),
    ("UnkurseTarget", F, 129),
    ("GiveExperienceToTargetTeam", F, 130),
    ("IfUnarmed", F, 131),
    ("RestockTargetAmmoIDAll", F, 132),
    ("RestockTargetAmmoIDFirst", F, 133),
    ("FlashTarget", F, 134),
    ("SetRedShift", F, 135),
    ("SetGreenShift", F, 136),
    ("SetBlueShift", F, 137),
    ("SetLight", F, 138),
    ("SetAlpha", F, 139),
    ("IfHitFromBehind", F, 140),
    ("IfHitFromFront", F, 141),
    ("IfHitFromLeft", F, 142),
    ("IfHitFromRight", F, 143),
    ("IfTargetIsOnSameTeam", F, 144),
    ("KillTarget", F, 145),
    ("UndoEnchant", F, 146),
    ("GetWaterLevel", F, 147),
    ("CostTargetMana", F, 148),
    ("IfTargetHasAnyID", F, 149),
    ("SetBumpSize", F, 150),
    ("IfNotDropped", F, 151),
    ("IfYIsLessThanX", F, 152),
    ("SetFlyHeight", F, 153),
    ("IfBlocked", F, 154),
    ("IfTargetIsDefending", F, 155),
    ("IfTargetIsAttacking", F, 156),
    ("IfStateIs0", F, 157),
    ("IfStateIs1", F, 158),
    ("IfStateIs2", F, 159),
    ("IfStateIs3", F, 160),
    ("IfStateIs4", F, 161),
    ("IfStateIs5", F, 162),
    ("IfStateIs6", F, 163),
    ("IfStateIs7", F, 164),
    ("IfContentIs", F, 165),
    ("SetTurnModeToWatchTarget", F, 166),
    ("IfStateIsNot", F, 167),
    ("IfXIsEqualToY", F, 168),
    ("DebugMessage", F, 169),
    ("BlackTarget", F, 170),
    ("SendMessageNear", F, 171),
    ("IfHitGround", F, 172),
    ("IfNameIsKnown", F, 173),
    ("IfUsageIsKnown", F, 174),
    ("IfHoldingItemID", F, 175),
    ("IfHoldingRangedWeapon", F, 176),
    ("IfHoldingMeleeWeapon", F, 177),
    ("IfHoldingShield", F, 178),
    ("IfKursed", F, 179),
    ("IfTargetIsKursed", F, 180),
    ("IfTargetIsDressedUp", F, 181),
    ("IfOverWater", F, 182),
    ("IfThrown", F, 183),
    ("MakeNameKnown", F, 184),
    ("MakeUsageKnown", F, 185),
    ("StopTargetMovement", F, 186),
    ("SetXY", F, 187),
    ("GetXY", F, 188),
    ("AddXY", F, 189),
    ("MakeAmmoKnown", F, 190),
    ("SpawnAttachedParticle", F, 191),
    ("SpawnExactParticle", F, 192),
    ("AccelerateTarget", F, 193),
    ("IfDistanceIsMoreThanTurn", F, 194),
    ("IfCrushed", F, 195),
    ("MakeCrushValid", F, 196),
    ("SetTargetToLowestTarget", F, 197),
    ("IfNotPutAway", F, 198),
    ("IfTakenOut", F, 199),
    ("IfAmmoOut", F, 200),
    ("PlaySoundLooped", F, 201),
    ("StopSound", F, 202),
    ("HealSelf", F, 203),
    ("Equip", F, 204),
    ("IfTargetHasItemIDEquipped", F, 205),
    ("SetOwnerToTarget", F, 206),
    ("SetTargetToOwner", F, 207),
    ("SetFrame", F, 208),
    ("BreakPassage", F, 209),
    ("SetReloadTime", F, 210),
    ("SetTargetToWideBlahID", F, 211),
    ("PoofTarget", F, 212),
    ("ChildDoActionOverride", F, 213),
    ("SpawnPoof", F, 214),
    ("SetSpeedPercent", F, 215),
    ("SetChildState", F, 216),
    ("SpawnAttachedSizedParticle", F, 217),
    ("ChangeArmor", F, 218),
    ("ShowTimer", F, 219),
    ("IfFacingTarget", F, 220),
    ("PlaySoundVolume", F, 221),
    ("SpawnAttachedFacedParticle", F, 222),
    ("IfStateIsOdd", F, 223),
    ("SetTargetToDistantEnemy", F, 224),
    ("Teleport", F, 225),
    ("GiveStrengthToTarget", F, 226),
    ("GiveWisdomToTarget", F, 227),
    ("GiveIntelligenceToTarget", F, 228),
    ("GiveDexterityToTarget", F, 229),
    ("GiveLifeToTarget", F, 230),
    ("GiveManaToTarget", F, 231),
    ("ShowMap", F, 232),
    ("ShowYouAreHere", F, 233),
    ("ShowBlipXY", F, 234),
    ("HealTarget", F, 235),
    ("PumpTarget", F, 236),
    ("CostAmmo", F, 237),
    ("MakeSimilarNamesKnown", F, 238),
    ("SpawnAttachedHolderParticle", F, 239),
    ("SetTargetReloadTime", F, 240),
    ("SetFogLevel", F, 241),
    ("GetFogLevel", F, 242),
    ("SetFogTAD", F, 243),
    ("SetFogBottomLevel", F, 244),
    ("GetFogBottomLevel", F, 245),
    ("CorrectActionForHand", F, 246),
    ("IfTargetIsMounted", F, 247),
    ("SparkleIcon", F, 248),
    ("UnsparkleIcon", F, 249),
    ("GetTileXY", F, 250),
    ("SetTileXY", F, 251),
    ("SetShadowSize", F, 252),
    ("OrderTarget", F, 253),
    ("SetTargetToWhoeverIsInPassage", F, 254),
    ("IfCharacterWasABook", F, 255),
    ("SetEnchantBoostValues", F, 256),
    ("SpawnCharacterXYZ", F, 257),
    ("SpawnExactCharacterXYZ", F, 258),
    ("ChangeTargetClass", F, 259),
    ("PlayFullSound", F, 260),
    ("SpawnExactChaseParticle", F, 261),
    ("CreateOrder", F, 262),
    ("OrderSpecialID", F, 263),
    ("UnkurseTargetInventory", F, 264),
    ("IfTargetIsSneaking", F, 265),
    ("DropItems", F, 266),
    ("RespawnTarget", F, 267),
    ("TargetDoActionSetFrame", F, 268),
    ("IfTargetCanSeeInvisible", F, 269),
    ("SetTargetToNearestBlahID", F, 270),
    ("SetTargetToNearestEnemy", F, 271),
    ("SetTargetToNearestFriend", F, 272),
    ("SetTargetToNearestLifeform", F, 273),
    ("FlashPassage", F, 274),
    ("FindTileInPassage", F, 275),
    ("IfHeldInLeftHand", F, 276),
    ("NotAnItem", F, 277),
    ("SetChildAmmo", F, 278),
    ("IfHitVulnerable", F, 279),
    ("IfTargetIsFlying", F, 280),
    ("IdentifyTarget", F, 281),
    ("BeatModule", F, 282),
    ("EndModule", F, 283),
    ("DisableExport", F, 284),
    ("EnableExport", F, 285),
    ("GetTargetState", F, 286),
    ("IfEquipped", F, 287),
    ("DropTargetMoney", F, 288),
    ("GetTargetContent", F, 289),
    ("DropTargetKeys", F, 290),
    ("JoinTeam", F, 291),
    ("TargetJoinTeam", F, 292),
    ("ClearMusicPassage", F, 293),
    ("ClearEndMessage", F, 294),
    ("AddEndMessage", F, 295),
    ("PlayMusic", F, 296),
    ("SetMusicPassage", F, 297),
    ("MakeCrushInvalid", F, 298),
    ("StopMusic", F, 299),
    ("FlashVariable", F, 300),
    ("AccelerateUp", F, 301),
    ("FlashVariableHeight", F, 302),
    ("SetDamageTime", F, 303),
    ("IfStateIs8", F, 304),
    ("IfStateIs9", F, 305),
    ("IfStateIs10", F, 306),
    ("IfStateIs11", F, 307),
    ("IfStateIs12", F, 308),
    ("IfStateIs13", F, 309),
    ("IfStateIs14", F, 310),
    ("IfStateIs15", F, 311),
    ("IfTargetIsAMount", F, 312),
    ("IfTargetIsAPlatform", F, 313),
    ("AddStat", F, 314),
    ("DisenchantTarget", F, 315),
    ("DisenchantAll", F, 316),
    ("SetVolumeNearestTeammate", F, 317),
    ("AddShopPassage", F, 318),
    ("TargetPayForArmor", F, 319),
    ("JoinEvilTeam", F, 320),
    ("JoinNullTeam", F, 321),
    ("JoinGoodTeam", F, 322),
    ("PitsKill", F, 323),
    ("SetTargetToPassageID", F, 324),
    ("MakeNameUnknown", F, 325),
    ("SpawnExactParticleEndSpawn", F, 326),
    ("SpawnPoofSpeedSpacingDamage", F, 327),
    ("GiveExperienceToGoodTeam", F, 328),
    ("DoNothing", F, 329),
    ("GrogTarget", F, 330),
    ("DazeTarget", F, 331),
    ("EnableRespawn", F, 332),
    ("DisableRespawn", F, 333),
    ("IfHolderScoredAHit", F, 334),
    ("IfHolderBlocked", F, 335),
    ("IfTargetHasNotFullMana", F, 336),
    ("EnableListenSkill", F, 337),
    ("SetTargetToLastItemUsed", F, 338),
    ("FollowLink", F, 339),
    ("IfOperatorIsLinux", F, 340),
    ("IfTargetIsAWeapon", F, 341),
    ("IfSomeoneIsStealing", F, 342),
    ("IfTargetIsASpell", F, 343),
    ("IfBackstabbed", F, 344),
    ("GetTargetDamageType", F, 345),
    ("AddQuest", F, 346),
    ("BeatQuestAllPlayers", F, 347),
    ("IfTargetHasQuest", F, 348),
    ("SetQuestLevel", F, 349),
    ("AddQuestAllPlayers", F, 350),
    ("AddBlipAllEnemies", F, 351),
    ("PitsFall", F, 352),
    ("IfTargetIsOwner", F, 353),
    ("SetSpeech", F, 354),
    ("TakePicture", F, 355),
    ("IfOperatorIsMacintosh", F, 356),
    ("IfModuleHasIDSZ", F, 357),
    ("MorphToTarget", F, 358),
    ("GiveManaFlowToTarget", F, 359),
    ("GiveManaReturnToTarget", F, 360),
    ("SetMoney", F, 361),
    ("IfTargetCanSeeKurses", F, 362),
    ("SpawnAttachedCharacter", F, 363),
    ("KurseTarget", F, 364),
    ("SetChildContent", F, 365),
    ("SetTargetToChild", F, 366),
    ("SetDamageThreshold", F, 367),
    ("AccelerateTargetUp", F, 368),
    ("SetTargetAmmo", F, 369),
    ("EnableInvictus", F, 370),
    ("DisableInvictus", F, 371),
    ("TargetDamageSelf", F, 372),
    ("SetTargetSize", F, 373),
    ("IfTargetIsFacingSelf", F, 374),
    ("DrawBillboard", F, 375),
    ("SetTargetToFirstBlahInPassage", F, 376),
    ("IfLevelUp", F, 377),
    ("GiveSkillToTarget", F, 378),
    ("SetTargetToNearbyMeleeWeapon", F, 379),

    ("tmpx", V, 0),
    ("tmpy", V, 1),
    ("tmpdist", V, 2),
    ("tmpdistance", V, 2),
    ("tmpturn", V, 3),
    ("tmpargument", V, 4),
    ("rand", V, 5),
    ("selfx", V, 6),
    ("selfy", V, 7),
    ("selfturn", V, 8),
    ("selfcounter", V, 9),
    ("selforder", V, 10),
    ("selfmorale", V, 11),
    ("selflife", V, 12),
    ("targetx", V, 13),
    ("targety", V, 14),
    ("targetdistance", V, 15),
    ("targetturn", V, 16),
    ("leaderx", V, 17),
    ("leadery", V, 18),
    ("leaderdistance", V, 19),
    ("leaderturn", V, 20),
    ("gotox", V, 21),
    ("gotoy", V, 22),
    ("gotodistance", V, 23),
    ("targetturnto", V, 24),
    ("passage", V, 25),
    ("weight", V, 26),
    ("selfaltitude", V, 27),
    ("selfid", V, 28),
    ("selfhateid", V, 29),
    ("selfmana", V, 30),
    ("targetstr", V, 31),
    ("targetwis", V, 32),
    ("targetint", V, 33),
    ("targetdex", V, 34),
    ("targetlife", V, 35),
    ("targetmana", V, 36),
    ("targetlevel", V, 37),
    ("targetspeedx", V, 38),
    ("targetspeedy", V, 39),
    ("targetspeedz", V, 40),
    ("selfspawnx", V, 41),
    ("selfspawny", V, 42),
    ("selfstate", V, 43),
    ("selfstr", V, 44),
    ("selfwis", V, 45),
    ("selfint", V, 46),
    ("selfdex", V, 47),
    ("selfmanaflow", V, 48),
    ("targetmanaflow", V, 49),
    ("selfattached", V, 50),
    ("swingturn", V, 51),
    ("xydistance", V, 52),
    ("selfz", V, 53),
    ("targetaltitude", V, 54),
    ("targetz", V, 55),
    ("selfindex", V, 56),
    ("ownerx", V, 57),
    ("ownery", V, 58),
    ("ownerturn", V, 59),
    ("ownerdistance", V, 60),
    ("ownerturnto", V, 61),
    ("xyturnto", V, 62),
    ("selfmoney", V, 63),
    ("selfaccel", V, 64),
    ("targetexp", V, 65),
    ("selfammo", V, 66),
    ("targetammo", V, 67),
    ("targetmoney", V, 68),
    ("targetturnaway", V, 69),
    ("selflevel", V, 70),
    ("targetreloadtime", V, 71),
    ("spawndistance", V, 72),
    ("targetmaxlife", V, 73),
    ("targetteam", V, 74),
    ("targetarmor", V, 75),
    ("difficulty", V, 76),
    ("timehours", V, 77),
    ("timeminutes", V, 78),
    ("timeseconds", V, 79),
    ("datemonth", V, 80),
    ("dateday", V, 81),
    ("SetState", V, 82),

    ("+", O, 0),
    ("-", O, 1),
    ("&", O, 2),
    (">", O, 3),
    ("<", O, 4),
    ("*", O, 5),
    ("/", O, 6),
    ("%", O, 7),

    ("LATCHLEFT", C, 1),
    ("LATCHRIGHT", C, 2),
    ("LATCHJUMP", C, 4),
    ("LATCHALTLEFT", C, 8),
    ("LATCHALTRIGHT", C, 16),
    ("LATCHPACKLEFT", C, 32),
    ("LATCHPACKRIGHT", C, 64),
    ("DAMAGESLASH", C, 0),
    ("DAMAGECRUSH", C, 1),
    ("DAMAGEPOKE", C, 2),
    ("DAMAGEHOLY", C, 3),
    ("DAMAGEEVIL", C, 4),
    ("DAMAGEFIRE", C, 5),
    ("DAMAGEICE", C, 6),
    ("DAMAGEZAP", C, 7),
    ("ACTIONDA", C, 0),
    ("ACTIONDB", C, 1),
    ("ACTIONDC", C, 2),
    ("ACTIONDD", C, 3),
    ("ACTIONUA", C, 4),
    ("ACTIONUB", C, 5),
    ("ACTIONUC", C, 6),
    ("ACTIONUD", C, 7),
    ("ACTIONTA", C, 8),
    ("ACTIONTB", C, 9),
    ("ACTIONTC", C, 10),
    ("ACTIONTD", C, 11),
    ("ACTIONCA", C, 12),
    ("ACTIONCB", C, 13),
    ("ACTIONCC", C, 14),
    ("ACTIONCD", C, 15),
    ("ACTIONSA", C, 16),
    ("ACTIONSB", C, 17),
    ("ACTIONSC", C, 18),
    ("ACTIONSD", C, 19),
    ("ACTIONBA", C, 20),
    ("ACTIONBB", C, 21),
    ("ACTIONBC", C, 22),
    ("ACTIONBD", C, 23),
    ("ACTIONLA", C, 24),
    ("ACTIONLB", C, 25),
    ("ACTIONLC", C, 26),
    ("ACTIONLD", C, 27),
    ("ACTIONXA", C, 28),
    ("ACTIONXB", C, 29),
    ("ACTIONXC", C, 30),
    ("ACTIONXD", C, 31),
    ("ACTIONFA", C, 32),
    ("ACTIONFB", C, 33),
    ("ACTIONFC", C, 34),
    ("ACTIONFD", C, 35),
    ("ACTIONPA", C, 36),
    ("ACTIONPB", C, 37),
    ("ACTIONPC", C, 38),
    ("ACTIONPD", C, 39),
    ("ACTIONEA", C, 40),
    ("ACTIONEB", C, 41),
    ("ACTIONRA", C, 42),
    ("ACTIONZA", C, 43),
    ("ACTIONZB", C, 44),
    ("ACTIONZC", C, 45),
    ("ACTIONZD", C, 46),
    ("ACTIONWA", C, 47),
    ("ACTIONWB", C, 48),
    ("ACTIONWC", C, 49),
    ("ACTIONWD", C, 50),
    ("ACTIONJA", C, 51),
    ("ACTIONJB", C, 52),
    ("ACTIONJC", C, 53),
    ("ACTIONHA", C, 54),
    ("ACTIONHB", C, 55),
    ("ACTIONHC", C, 56),
    ("ACTIONHD", C, 57),
    ("ACTIONKA", C, 58),
    ("ACTIONKB", C, 59),
    ("ACTIONKC", C, 60),
    ("ACTIONKD", C, 61),
    ("ACTIONMA", C, 62),
    ("ACTIONMB", C, 63),
    ("ACTIONMC", C, 64),
    ("ACTIONMD", C, 65),
    ("ACTIONME", C, 66),
    ("ACTIONMF", C, 67),
    ("ACTIONMG", C, 68),
    ("ACTIONMH", C, 69),
    ("ACTIONMI", C, 70),
    ("ACTIONMJ", C, 71),
    ("ACTIONMK", C, 72),
    ("ACTIONML", C, 73),
    ("ACTIONMM", C, 74),
    ("ACTIONMN", C, 75),
    ("EXPSECRET", C, 0),
    ("EXPQUEST", C, 1),
    ("EXPDARE", C, 2),
    ("EXPKILL", C, 3),
    ("EXPMURDER", C, 4),
    ("EXPREVENGE", C, 5),
    ("EXPTEAMWORK", C, 6),
    ("EXPROLEPLAY", C, 7),
    ("MESSAGEDEATH", C, 0),
    ("MESSAGEHATE", C, 1),
    ("MESSAGEOUCH", C, 2),
    ("MESSAGEFRAG", C, 3),
    ("MESSAGEACCIDENT", C, 4),
    ("MESSAGECOSTUME", C, 5),
    ("ORDERMOVE", C, 0),
    ("ORDERATTACK", C, 1),
    ("ORDERASSIST", C, 2),
    ("ORDERSTAND", C, 3),
    ("ORDERTERRAIN", C, 4),
    ("WHITE", C, 0),
    ("RED", C, 1),
    ("YELLOW", C, 2),
    ("GREEN", C, 3),
    ("BLUE", C, 4),
    ("PURPLE", C, 5),
    ("FXNOREFLECT", C, 1),
    ("FXDRAWREFLECT", C, 2),
    ("FXANIM", C, 4),
    ("FXWATER", C, 8),
    ("FXBARRIER", C, 16),
    ("FXIMPASS", C, 32),
    ("FXDAMAGE", C, 64),
    ("FXSLIPPY", C, 128),
    ("TEAMA", C, 0),
    ("TEAMB", C, 1),
    ("TEAMC", C, 2),
    ("TEAMD", C, 3),
    ("TEAME", C, 4),
    ("TEAMN", C, 13),
    ("INVENTORY", C, 0),
    ("LEFT", C, 1),
    ("RIGHT", C, 2),
    ("EASY", C, 0),
    ("NORMAL", C, 1),
    ("HARD", C, 2),
    ("STATEPARRY", C, 0),
    ("STATEWANDER", C, 1),
    ("STATEGUARD", C, 2),
    ("STATEFOLLOW", C, 3),
    ("STATESURROUND", C, 4),
    ("STATERETREAT", C, 5),
    ("STATECHARGE", C, 6),
    ("STATECOMBAT", C, 7),
    ("BLAHDEAD", C, 1),
    ("BLAHENEMIES", C, 2),
    ("BLAHFRIENDS", C, 4),
    ("BLAHITEMS", C, 8),
    ("BLAHINVERTID", C, 16),
    ("BLAHPLAYERS", C, 32),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaced_entry_leaves_no_reverse_name() {
        let table = SymbolTable::from_entries(vec![("A", F, 1), ("A", F, 2)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A").map(|s| s.value), Some(2));
        assert_eq!(table.name_of(F, 1), None);
        assert_eq!(table.name_of(F, 2), Some("A"));
    }

    #[test]
    fn test_reverse_lookup_prefers_first_entry() {
        let table = SymbolTable::from_entries(vec![("B", V, 1), ("A", V, 1), ("B", V, 7)]);
        assert_eq!(table.name_of(V, 1), Some("A"));
        assert_eq!(table.name_of(V, 7), Some("B"));
    }

    #[test]
    fn test_builtin_values_fit() {
        let table = SymbolTable::builtin();
        assert_eq!(table.iter().count(), table.len());
        for symbol in table.iter() {
            assert!(symbol.kind.fits(symbol.value), "{} {}", symbol.kind, symbol.name);
        }
        assert_eq!(table.end().map(|s| s.value), Some(53));
    }
}
