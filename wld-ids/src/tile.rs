//! Block (tile) type ids as stored in the tile section.

id_table! {
    0 => DIRT = "Dirt",
    1 => STONE = "Stone",
    2 => GRASS = "Grass",
    3 => PLANTS = "Plants",
    4 => TORCHES = "Torches",
    5 => TREES = "Trees",
    6 => IRON = "Iron",
    7 => COPPER = "Copper",
    8 => GOLD = "Gold",
    9 => SILVER = "Silver",
    10 => CLOSED_DOOR = "ClosedDoor",
    11 => OPEN_DOOR = "OpenDoor",
    12 => HEART = "Heart",
    13 => BOTTLES = "Bottles",
    14 => TABLES = "Tables",
    15 => CHAIRS = "Chairs",
    16 => ANVILS = "Anvils",
    17 => FURNACES = "Furnaces",
    18 => WORK_BENCHES = "WorkBenches",
    19 => PLATFORMS = "Platforms",
    20 => SAPLINGS = "Saplings",
    21 => CONTAINERS = "Containers",
    22 => DEMONITE = "Demonite",
    23 => CORRUPT_GRASS = "CorruptGrass",
    24 => CORRUPT_PLANTS = "CorruptPlants",
    25 => EBONSTONE = "Ebonstone",
    26 => DEMON_ALTAR = "DemonAltar",
    27 => SUNFLOWER = "Sunflower",
    28 => POTS = "Pots",
    29 => PIGGY_BANK = "PiggyBank",
    30 => WOOD_BLOCK = "WoodBlock",
    31 => SHADOW_ORBS = "ShadowOrbs",
    32 => CORRUPT_THORNS = "CorruptThorns",
    33 => CANDLES = "Candles",
    34 => CHANDELIERS = "Chandeliers",
    35 => JACKOLANTERNS = "Jackolanterns",
    36 => PRESENTS = "Presents",
    37 => METEORITE = "Meteorite",
    38 => GRAY_BRICK = "GrayBrick",
    39 => RED_BRICK = "RedBrick",
    40 => CLAY_BLOCK = "ClayBlock",
    41 => BLUE_DUNGEON_BRICK = "BlueDungeonBrick",
    42 => HANGING_LANTERNS = "HangingLanterns",
    43 => GREEN_DUNGEON_BRICK = "GreenDungeonBrick",
    44 => PINK_DUNGEON_BRICK = "PinkDungeonBrick",
    45 => GOLD_BRICK = "GoldBrick",
    46 => SILVER_BRICK = "SilverBrick",
    47 => COPPER_BRICK = "CopperBrick",
    48 => SPIKES = "Spikes",
    49 => WATER_CANDLE = "WaterCandle",
    50 => BOOKS = "Books",
    51 => COBWEB = "Cobweb",
    52 => VINES = "Vines",
    53 => SAND = "Sand",
    54 => GLASS = "Glass",
    55 => SIGNS = "Signs",
    56 => OBSIDIAN = "Obsidian",
    57 => ASH = "Ash",
    58 => HELLSTONE = "Hellstone",
    59 => MUD = "Mud",
    60 => JUNGLE_GRASS = "JungleGrass",
    61 => JUNGLE_PLANTS = "JunglePlants",
    62 => JUNGLE_VINES = "JungleVines",
    63 => SAPPHIRE = "Sapphire",
    64 => RUBY = "Ruby",
    65 => EMERALD = "Emerald",
    66 => TOPAZ = "Topaz",
    67 => AMETHYST = "Amethyst",
    68 => DIAMOND = "Diamond",
    69 => JUNGLE_THORNS = "JungleThorns",
    70 => MUSHROOM_GRASS = "MushroomGrass",
    71 => MUSHROOM_PLANTS = "MushroomPlants",
    72 => MUSHROOM_TREES = "MushroomTrees",
    73 => PLANTS2 = "Plants2",
    74 => JUNGLE_PLANTS2 = "JunglePlants2",
    75 => OBSIDIAN_BRICK = "ObsidianBrick",
    76 => HELLSTONE_BRICK = "HellstoneBrick",
    77 => HELLFORGE = "Hellforge",
    78 => CLAY_POT = "ClayPot",
    79 => BEDS = "Beds",
    80 => CACTUS = "Cactus",
    81 => CORAL = "Coral",
    82 => IMMATURE_HERBS = "ImmatureHerbs",
    83 => MATURE_HERBS = "MatureHerbs",
    84 => BLOOMING_HERBS = "BloomingHerbs",
    85 => TOMBSTONES = "Tombstones",
    86 => LOOM = "Loom",
    87 => PIANOS = "Pianos",
    88 => DRESSERS = "Dressers",
    89 => BENCHES = "Benches",
    90 => BATHTUBS = "Bathtubs",
    91 => BANNERS = "Banners",
    92 => LAMPPOSTS = "Lampposts",
    93 => LAMPS = "Lamps",
    94 => KEGS = "Kegs",
    95 => CHINESE_LANTERNS = "ChineseLanterns",
    96 => COOKING_POTS = "CookingPots",
    97 => SAFES = "Safes",
    98 => SKULL_LANTERNS = "SkullLanterns",
    99 => TRASH_CAN = "TrashCan",
    100 => CANDELABRAS = "Candelabras",
    101 => BOOKCASES = "Bookcases",
    102 => THRONES = "Thrones",
    103 => BOWLS = "Bowls",
    104 => GRANDFATHER_CLOCKS = "GrandfatherClocks",
    105 => STATUES = "Statues",
    106 => SAWMILL = "Sawmill",
    107 => COBALT = "Cobalt",
    108 => MYTHRIL = "Mythril",
    109 => HALLOWED_GRASS = "HallowedGrass",
    110 => HALLOWED_PLANTS = "HallowedPlants",
    111 => ADAMANTITE = "Adamantite",
    112 => EBONSAND = "Ebonsand",
    113 => HALLOWED_PLANTS2 = "HallowedPlants2",
    114 => TINKERERS_WORKBENCH = "TinkerersWorkbench",
    115 => HALLOWED_VINES = "HallowedVines",
    116 => PEARLSAND = "Pearlsand",
    117 => PEARLSTONE = "Pearlstone",
    118 => PEARLSTONE_BRICK = "PearlstoneBrick",
    119 => IRIDESCENT_BRICK = "IridescentBrick",
    120 => MUDSTONE = "Mudstone",
    121 => COBALT_BRICK = "CobaltBrick",
    122 => MYTHRIL_BRICK = "MythrilBrick",
    123 => SILT = "Silt",
    124 => WOODEN_BEAM = "WoodenBeam",
    125 => CRYSTAL_BALL = "CrystalBall",
    126 => DISCO_BALL = "DiscoBall",
    127 => MAGICAL_ICE_BLOCK = "MagicalIceBlock",
    128 => MANNEQUIN = "Mannequin",
    129 => CRYSTALS = "Crystals",
    130 => ACTIVE_STONE_BLOCK = "ActiveStoneBlock",
    131 => INACTIVE_STONE_BLOCK = "InactiveStoneBlock",
    132 => LEVER = "Lever",
    133 => ADAMANTITE_FORGE = "AdamantiteForge",
    134 => MYTHRIL_ANVIL = "MythrilAnvil",
    135 => PRESSURE_PLATES = "PressurePlates",
    136 => SWITCHES = "Switches",
    137 => TRAPS = "Traps",
    138 => BOULDER = "Boulder",
    139 => MUSIC_BOXES = "MusicBoxes",
    140 => DEMONITE_BRICK = "DemoniteBrick",
    141 => EXPLOSIVES = "Explosives",
    142 => INLET_PUMP = "InletPump",
    143 => OUTLET_PUMP = "OutletPump",
    144 => TIMERS = "Timers",
    145 => CANDY_CANE_BLOCK = "CandyCaneBlock",
    146 => GREEN_CANDY_CANE_BLOCK = "GreenCandyCaneBlock",
    147 => SNOW_BLOCK = "SnowBlock",
    148 => SNOW_BRICK = "SnowBrick",
    149 => HOLIDAY_LIGHTS = "HolidayLights",
    150 => ADAMANTITE_BEAM = "AdamantiteBeam",
    151 => SANDSTONE_BRICK = "SandstoneBrick",
    152 => EBONSTONE_BRICK = "EbonstoneBrick",
    153 => RED_STUCCO = "RedStucco",
    154 => YELLOW_STUCCO = "YellowStucco",
    155 => GREEN_STUCCO = "GreenStucco",
    156 => GRAY_STUCCO = "GrayStucco",
    157 => EBONWOOD = "Ebonwood",
    158 => RICH_MAHOGANY = "RichMahogany",
    159 => PEARLWOOD = "Pearlwood",
    160 => RAINBOW_BRICK = "RainbowBrick",
    161 => ICE_BLOCK = "IceBlock",
    162 => BREAKABLE_ICE = "BreakableIce",
    163 => CORRUPT_ICE = "CorruptIce",
    164 => HALLOWED_ICE = "HallowedIce",
    165 => STALACTITE = "Stalactite",
    166 => TIN = "Tin",
    167 => LEAD = "Lead",
    168 => TUNGSTEN = "Tungsten",
    169 => PLATINUM = "Platinum",
    170 => PINE_TREE = "PineTree",
    171 => CHRISTMAS_TREE = "ChristmasTree",
    172 => SINKS = "Sinks",
    173 => PLATINUM_CANDELABRA = "PlatinumCandelabra",
    174 => PLATINUM_CANDLE = "PlatinumCandle",
    175 => TIN_BRICK = "TinBrick",
    176 => TUNGSTEN_BRICK = "TungstenBrick",
    177 => PLATINUM_BRICK = "PlatinumBrick",
    178 => EXPOSED_GEMS = "ExposedGems",
    179 => GREEN_MOSS = "GreenMoss",
    180 => BROWN_MOSS = "BrownMoss",
    181 => RED_MOSS = "RedMoss",
    182 => BLUE_MOSS = "BlueMoss",
    183 => PURPLE_MOSS = "PurpleMoss",
    184 => LONG_MOSS = "LongMoss",
    185 => SMALL_PILES = "SmallPiles",
    186 => LARGE_PILES = "LargePiles",
    187 => LARGE_PILES2 = "LargePiles2",
    188 => CACTUS_BLOCK = "CactusBlock",
    189 => CLOUD = "Cloud",
    190 => MUSHROOM_BLOCK = "MushroomBlock",
    191 => LIVING_WOOD = "LivingWood",
    192 => LEAF_BLOCK = "LeafBlock",
    193 => SLIME_BLOCK = "SlimeBlock",
    194 => BONE_BLOCK = "BoneBlock",
    195 => FLESH_BLOCK = "FleshBlock",
    196 => RAIN_CLOUD = "RainCloud",
    197 => FROZEN_SLIME_BLOCK = "FrozenSlimeBlock",
    198 => ASPHALT = "Asphalt",
    199 => CRIMSON_GRASS = "CrimsonGrass",
    200 => FLESH_ICE = "FleshIce",
    201 => CRIMSON_PLANTS = "CrimsonPlants",
    202 => SUNPLATE = "Sunplate",
    203 => CRIMSTONE = "Crimstone",
    204 => CRIMTANE = "Crimtane",
    205 => CRIMSON_VINES = "CrimsonVines",
    206 => ICE_BRICK = "IceBrick",
    207 => WATER_FOUNTAIN = "WaterFountain",
    208 => SHADEWOOD = "Shadewood",
    209 => CANNON = "Cannon",
    210 => LAND_MINE = "LandMine",
    211 => CHLOROPHYTE = "Chlorophyte",
    212 => SNOWBALL_LAUNCHER = "SnowballLauncher",
    213 => ROPE = "Rope",
    214 => CHAIN = "Chain",
    215 => CAMPFIRE = "Campfire",
    216 => FIREWORK = "Firework",
    217 => BLENDOMATIC = "Blendomatic",
    218 => MEAT_GRINDER = "MeatGrinder",
    219 => EXTRACTINATOR = "Extractinator",
    220 => SOLIDIFIER = "Solidifier",
    221 => PALLADIUM = "Palladium",
    222 => ORICHALCUM = "Orichalcum",
    223 => TITANIUM = "Titanium",
    224 => SLUSH = "Slush",
    225 => HIVE = "Hive",
    226 => LIHZAHRD_BRICK = "LihzahrdBrick",
    227 => DYE_PLANTS = "DyePlants",
    228 => DYE_VAT = "DyeVat",
    229 => HONEY_BLOCK = "HoneyBlock",
    230 => CRISPY_HONEY_BLOCK = "CrispyHoneyBlock",
    231 => LARVA = "Larva",
    232 => WOODEN_SPIKES = "WoodenSpikes",
    233 => PLANT_DETRITUS = "PlantDetritus",
    234 => CRIMSAND = "Crimsand",
    235 => TELEPORTER = "Teleporter",
    236 => LIFE_FRUIT = "LifeFruit",
    237 => LIHZAHRD_ALTAR = "LihzahrdAltar",
    238 => PLANTERA_BULB = "PlanteraBulb",
    239 => METAL_BARS = "MetalBars",
    240 => PAINTING3_X3 = "Painting3X3",
    241 => PAINTING4_X3 = "Painting4X3",
    242 => PAINTING6_X4 = "Painting6X4",
    243 => IMBUING_STATION = "ImbuingStation",
    244 => BUBBLE_MACHINE = "BubbleMachine",
    245 => PAINTING2_X3 = "Painting2X3",
    246 => PAINTING3_X2 = "Painting3X2",
    247 => AUTOHAMMER = "Autohammer",
    248 => PALLADIUM_COLUMN = "PalladiumColumn",
    249 => BUBBLEGUM_BLOCK = "BubblegumBlock",
    250 => TITANSTONE = "Titanstone",
    251 => PUMPKIN_BLOCK = "PumpkinBlock",
    252 => HAY_BLOCK = "HayBlock",
    253 => SPOOKY_WOOD = "SpookyWood",
    254 => PUMPKINS = "Pumpkins",
    255 => AMETHYST_GEMSPARK_OFF = "AmethystGemsparkOff",
    256 => TOPAZ_GEMSPARK_OFF = "TopazGemsparkOff",
    257 => SAPPHIRE_GEMSPARK_OFF = "SapphireGemsparkOff",
    258 => EMERALD_GEMSPARK_OFF = "EmeraldGemsparkOff",
    259 => RUBY_GEMSPARK_OFF = "RubyGemsparkOff",
    260 => DIAMOND_GEMSPARK_OFF = "DiamondGemsparkOff",
    261 => AMBER_GEMSPARK_OFF = "AmberGemsparkOff",
    262 => AMETHYST_GEMSPARK = "AmethystGemspark",
    263 => TOPAZ_GEMSPARK = "TopazGemspark",
    264 => SAPPHIRE_GEMSPARK = "SapphireGemspark",
    265 => EMERALD_GEMSPARK = "EmeraldGemspark",
    266 => RUBY_GEMSPARK = "RubyGemspark",
    267 => DIAMOND_GEMSPARK = "DiamondGemspark",
    268 => AMBER_GEMSPARK = "AmberGemspark",
    269 => WOMANNEQUIN = "Womannequin",
    270 => FIREFLYINA_BOTTLE = "FireflyinaBottle",
    271 => LIGHTNING_BUGINA_BOTTLE = "LightningBuginaBottle",
    272 => COG = "Cog",
    273 => STONE_SLAB = "StoneSlab",
    274 => SAND_STONE_SLAB = "SandStoneSlab",
    275 => BUNNY_CAGE = "BunnyCage",
    276 => SQUIRREL_CAGE = "SquirrelCage",
    277 => MALLARD_DUCK_CAGE = "MallardDuckCage",
    278 => DUCK_CAGE = "DuckCage",
    279 => BIRD_CAGE = "BirdCage",
    280 => BLUE_JAY = "BlueJay",
    281 => CARDINAL_CAGE = "CardinalCage",
    282 => FISH_BOWL = "FishBowl",
    283 => HEAVY_WORK_BENCH = "HeavyWorkBench",
    284 => COPPER_PLATING = "CopperPlating",
    285 => SNAIL_CAGE = "SnailCage",
    286 => GLOWING_SNAIL_CAGE = "GlowingSnailCage",
    287 => AMMO_BOX = "AmmoBox",
    288 => MONARCH_BUTTERFLY_JAR = "MonarchButterflyJar",
    289 => PURPLE_EMPEROR_BUTTERFLY_JAR = "PurpleEmperorButterflyJar",
    290 => RED_ADMIRAL_BUTTERFLY_JAR = "RedAdmiralButterflyJar",
    291 => ULYSSES_BUTTERFLY_JAR = "UlyssesButterflyJar",
    292 => SULPHUR_BUTTERFLY_JAR = "SulphurButterflyJar",
    293 => TREE_NYMPH_BUTTERFLY_JAR = "TreeNymphButterflyJar",
    294 => ZEBRA_SWALLOWTAIL_BUTTERFLY_JAR = "ZebraSwallowtailButterflyJar",
    295 => JULIA_BUTTERFLY_JAR = "JuliaButterflyJar",
    296 => SCORPION_CAGE = "ScorpionCage",
    297 => BLACK_SCORPION_CAGE = "BlackScorpionCage",
    298 => FROG_CAGE = "FrogCage",
    299 => MOUSE_CAGE = "MouseCage",
    300 => BONE_WELDER = "BoneWelder",
    301 => FLESH_CLONING_VAT = "FleshCloningVat",
    302 => GLASS_KILN = "GlassKiln",
    303 => LIHZAHRD_FURNACE = "LihzahrdFurnace",
    304 => LIVING_LOOM = "LivingLoom",
    305 => SKY_MILL = "SkyMill",
    306 => ICE_MACHINE = "IceMachine",
    307 => STEAMPUNK_BOILER = "SteampunkBoiler",
    308 => HONEY_DISPENSER = "HoneyDispenser",
    309 => PENGUIN_CAGE = "PenguinCage",
    310 => WORM_CAGE = "WormCage",
    311 => DYNASTY_WOOD = "DynastyWood",
    312 => RED_DYNASTY_SHINGLES = "RedDynastyShingles",
    313 => BLUE_DYNASTY_SHINGLES = "BlueDynastyShingles",
    314 => MINECART_TRACK = "MinecartTrack",
    315 => CORALSTONE = "Coralstone",
    316 => BLUE_JELLYFISH_BOWL = "BlueJellyfishBowl",
    317 => GREEN_JELLYFISH_BOWL = "GreenJellyfishBowl",
    318 => PINK_JELLYFISH_BOWL = "PinkJellyfishBowl",
    319 => SHIP_IN_ABOTTLE = "ShipInABottle",
    320 => SEAWEED_PLANTER = "SeaweedPlanter",
    321 => BOREAL_WOOD = "BorealWood",
    322 => PALM_WOOD = "PalmWood",
    323 => PALM_TREE = "PalmTree",
    324 => BEACH_PILES = "BeachPiles",
    325 => TIN_PLATING = "TinPlating",
    326 => WATERFALL = "Waterfall",
    327 => LAVAFALL = "Lavafall",
    328 => CONFETTI = "Confetti",
    329 => CONFETTI_BLACK = "ConfettiBlack",
    330 => COPPER_COIN_PILE = "CopperCoinPile",
    331 => SILVER_COIN_PILE = "SilverCoinPile",
    332 => GOLD_COIN_PILE = "GoldCoinPile",
    333 => PLATINUM_COIN_PILE = "PlatinumCoinPile",
    334 => WEAPONS_RACK = "WeaponsRack",
    335 => FIREWORKS_BOX = "FireworksBox",
    336 => LIVING_FIRE = "LivingFire",
    337 => ALPHABET_STATUES = "AlphabetStatues",
    338 => FIREWORK_FOUNTAIN = "FireworkFountain",
    339 => GRASSHOPPER_CAGE = "GrasshopperCage",
    340 => LIVING_CURSED_FIRE = "LivingCursedFire",
    341 => LIVING_DEMON_FIRE = "LivingDemonFire",
    342 => LIVING_FROST_FIRE = "LivingFrostFire",
    343 => LIVING_ICHOR = "LivingIchor",
    344 => LIVING_ULTRABRIGHT_FIRE = "LivingUltrabrightFire",
    345 => HONEYFALL = "Honeyfall",
    346 => CHLOROPHYTE_BRICK = "ChlorophyteBrick",
    347 => CRIMTANE_BRICK = "CrimtaneBrick",
    348 => SHROOMITE_PLATING = "ShroomitePlating",
    349 => MUSHROOM_STATUE = "MushroomStatue",
    350 => MARTIAN_CONDUIT_PLATING = "MartianConduitPlating",
    351 => CHIMNEY_SMOKE = "ChimneySmoke",
    352 => CRIMTANE_THORNS = "CrimtaneThorns",
    353 => VINE_ROPE = "VineRope",
    354 => BEWITCHING_TABLE = "BewitchingTable",
    355 => ALCHEMY_TABLE = "AlchemyTable",
    356 => SUNDIAL = "Sundial",
    357 => MARBLE_BLOCK = "MarbleBlock",
    358 => GOLD_BIRD_CAGE = "GoldBirdCage",
    359 => GOLD_BUNNY_CAGE = "GoldBunnyCage",
    360 => GOLD_BUTTERFLY_CAGE = "GoldButterflyCage",
    361 => GOLD_FROG_CAGE = "GoldFrogCage",
    362 => GOLD_GRASSHOPPER_CAGE = "GoldGrasshopperCage",
    363 => GOLD_MOUSE_CAGE = "GoldMouseCage",
    364 => GOLD_WORM_CAGE = "GoldWormCage",
    365 => SILK_ROPE = "SilkRope",
    366 => WEB_ROPE = "WebRope",
    367 => MARBLE = "Marble",
    368 => GRANITE = "Granite",
    369 => GRANITE_BLOCK = "GraniteBlock",
    370 => METEORITE_BRICK = "MeteoriteBrick",
    371 => PINK_SLIME_BLOCK = "PinkSlimeBlock",
    372 => PEACE_CANDLE = "PeaceCandle",
    373 => WATER_DRIP = "WaterDrip",
    374 => LAVA_DRIP = "LavaDrip",
    375 => HONEY_DRIP = "HoneyDrip",
    376 => FISHING_CRATE = "FishingCrate",
    377 => SHARPENING_STATION = "SharpeningStation",
    378 => TARGET_DUMMY = "TargetDummy",
    379 => BUBBLE = "Bubble",
    380 => PLANTER_BOX = "PlanterBox",
    381 => LAVA_MOSS = "LavaMoss",
    382 => VINE_FLOWERS = "VineFlowers",
    383 => LIVING_MAHOGANY = "LivingMahogany",
    384 => LIVING_MAHOGANY_LEAVES = "LivingMahoganyLeaves",
    385 => CRYSTAL_BLOCK = "CrystalBlock",
    386 => TRAPDOOR_OPEN = "TrapdoorOpen",
    387 => TRAPDOOR_CLOSED = "TrapdoorClosed",
    388 => TALL_GATE_CLOSED = "TallGateClosed",
    389 => TALL_GATE_OPEN = "TallGateOpen",
    390 => LAVA_LAMP = "LavaLamp",
    391 => CAGE_ENCHANTED_NIGHTCRAWLER = "CageEnchantedNightcrawler",
    392 => CAGE_BUGGY = "CageBuggy",
    393 => CAGE_GRUBBY = "CageGrubby",
    394 => CAGE_SLUGGY = "CageSluggy",
    395 => ITEM_FRAME = "ItemFrame",
    396 => SANDSTONE = "Sandstone",
    397 => HARDENED_SAND = "HardenedSand",
    398 => CORRUPT_HARDENED_SAND = "CorruptHardenedSand",
    399 => CRIMSON_HARDENED_SAND = "CrimsonHardenedSand",
    400 => CORRUPT_SANDSTONE = "CorruptSandstone",
    401 => CRIMSON_SANDSTONE = "CrimsonSandstone",
    402 => HALLOW_HARDENED_SAND = "HallowHardenedSand",
    403 => HALLOW_SANDSTONE = "HallowSandstone",
    404 => DESERT_FOSSIL = "DesertFossil",
    405 => FIREPLACE = "Fireplace",
    406 => CHIMNEY = "Chimney",
    407 => FOSSIL_ORE = "FossilOre",
    408 => LUNAR_ORE = "LunarOre",
    409 => LUNAR_BRICK = "LunarBrick",
    410 => LUNAR_MONOLITH = "LunarMonolith",
    411 => DETONATOR = "Detonator",
    412 => LUNAR_CRAFTING_STATION = "LunarCraftingStation",
    413 => SQUIRREL_ORANGE_CAGE = "SquirrelOrangeCage",
    414 => SQUIRREL_GOLD_CAGE = "SquirrelGoldCage",
    415 => LUNAR_BLOCK_SOLAR = "LunarBlockSolar",
    416 => LUNAR_BLOCK_VORTEX = "LunarBlockVortex",
    417 => LUNAR_BLOCK_NEBULA = "LunarBlockNebula",
    418 => LUNAR_BLOCK_STARDUST = "LunarBlockStardust",
    419 => LOGIC_GATE_LAMP = "LogicGateLamp",
    420 => LOGIC_GATE = "LogicGate",
    421 => CONVEYOR_BELT_LEFT = "ConveyorBeltLeft",
    422 => CONVEYOR_BELT_RIGHT = "ConveyorBeltRight",
    423 => LOGIC_SENSOR = "LogicSensor",
    424 => WIRE_PIPE = "WirePipe",
    425 => ANNOUNCEMENT_BOX = "AnnouncementBox",
    426 => TEAM_BLOCK_RED = "TeamBlockRed",
    427 => TEAM_BLOCK_RED_PLATFORM = "TeamBlockRedPlatform",
    428 => WEIGHTED_PRESSURE_PLATE = "WeightedPressurePlate",
    429 => WIRE_BULB = "WireBulb",
    430 => TEAM_BLOCK_GREEN = "TeamBlockGreen",
    431 => TEAM_BLOCK_BLUE = "TeamBlockBlue",
    432 => TEAM_BLOCK_YELLOW = "TeamBlockYellow",
    433 => TEAM_BLOCK_PINK = "TeamBlockPink",
    434 => TEAM_BLOCK_WHITE = "TeamBlockWhite",
    435 => TEAM_BLOCK_GREEN_PLATFORM = "TeamBlockGreenPlatform",
    436 => TEAM_BLOCK_BLUE_PLATFORM = "TeamBlockBluePlatform",
    437 => TEAM_BLOCK_YELLOW_PLATFORM = "TeamBlockYellowPlatform",
    438 => TEAM_BLOCK_PINK_PLATFORM = "TeamBlockPinkPlatform",
    439 => TEAM_BLOCK_WHITE_PLATFORM = "TeamBlockWhitePlatform",
    440 => GEM_LOCKS = "GemLocks",
    441 => FAKE_CONTAINERS = "FakeContainers",
    442 => PROJECTILE_PRESSURE_PAD = "ProjectilePressurePad",
    443 => GEYSER_TRAP = "GeyserTrap",
    444 => BEE_HIVE = "BeeHive",
    445 => PIXEL_BOX = "PixelBox",
    446 => SILLY_BALLOON_PINK = "SillyBalloonPink",
    447 => SILLY_BALLOON_PURPLE = "SillyBalloonPurple",
    448 => SILLY_BALLOON_GREEN = "SillyBalloonGreen",
    449 => SILLY_STREAMER_BLUE = "SillyStreamerBlue",
    450 => SILLY_STREAMER_GREEN = "SillyStreamerGreen",
    451 => SILLY_STREAMER_PINK = "SillyStreamerPink",
    452 => SILLY_BALLOON_MACHINE = "SillyBalloonMachine",
    453 => SILLY_BALLOON_TILE = "SillyBalloonTile",
    454 => PIGRONATA = "Pigronata",
    455 => PARTY_MONOLITH = "PartyMonolith",
    456 => PARTY_BUNDLE_OF_BALLOON_TILE = "PartyBundleOfBalloonTile",
    457 => PARTY_PRESENT = "PartyPresent",
    458 => SAND_FALL_BLOCK = "SandFallBlock",
    459 => SNOW_FALL_BLOCK = "SnowFallBlock",
    460 => SNOW_CLOUD = "SnowCloud",
    461 => SAND_DRIP = "SandDrip",
    462 => DJINN_LAMP = "DjinnLamp",
    463 => DEFENDERS_FORGE = "DefendersForge",
    464 => WAR_TABLE = "WarTable",
    465 => WAR_TABLE_BANNER = "WarTableBanner",
    466 => ELDER_CRYSTAL_STAND = "ElderCrystalStand",
    467 => CONTAINERS2 = "Containers2",
    468 => FAKE_CONTAINERS2 = "FakeContainers2",
    469 => TABLES2 = "Tables2",
    470 => DISPLAY_DOLL = "DisplayDoll",
    471 => WEAPONS_RACK2 = "WeaponsRack2",
    472 => IRON_BRICK = "IronBrick",
    473 => LEAD_BRICK = "LeadBrick",
    474 => LESION_BLOCK = "LesionBlock",
    475 => HAT_RACK = "HatRack",
    476 => GOLF_HOLE = "GolfHole",
    477 => GOLF_GRASS = "GolfGrass",
    478 => CRIMSTONE_BRICK = "CrimstoneBrick",
    479 => SMOOTH_SANDSTONE = "SmoothSandstone",
    480 => BLOOD_MOON_MONOLITH = "BloodMoonMonolith",
    481 => CRACKED_BLUE_DUNGEON_BRICK = "CrackedBlueDungeonBrick",
    482 => CRACKED_GREEN_DUNGEON_BRICK = "CrackedGreenDungeonBrick",
    483 => CRACKED_PINK_DUNGEON_BRICK = "CrackedPinkDungeonBrick",
    484 => ROLLING_CACTUS = "RollingCactus",
    485 => ANTLION_LARVA = "AntlionLarva",
    486 => DRUM_SET = "DrumSet",
    487 => PICNIC_TABLE = "PicnicTable",
    488 => FALLEN_LOG = "FallenLog",
    489 => PIN_WHEEL = "PinWheel",
    490 => WEATHER_VANE = "WeatherVane",
    491 => VOID_VAULT = "VoidVault",
    492 => GOLF_GRASS_HALLOWED = "GolfGrassHallowed",
    493 => GOLF_CUP_FLAG = "GolfCupFlag",
    494 => GOLF_TEE = "GolfTee",
    495 => SHELL_PILE = "ShellPile",
    496 => ANTI_PORTAL_BLOCK = "AntiPortalBlock",
    497 => TOILETS = "Toilets",
    498 => SPIDER = "Spider",
    499 => LESION_STATION = "LesionStation",
    500 => SOLAR_BRICK = "SolarBrick",
    501 => VORTEX_BRICK = "VortexBrick",
    502 => NEBULA_BRICK = "NebulaBrick",
    503 => STARDUST_BRICK = "StardustBrick",
    504 => MYSTIC_SNAKE_ROPE = "MysticSnakeRope",
    505 => GOLD_GOLDFISH_BOWL = "GoldGoldfishBowl",
    506 => CAT_BAST = "CatBast",
    507 => GOLD_STARRY_GLASS_BLOCK = "GoldStarryGlassBlock",
    508 => BLUE_STARRY_GLASS_BLOCK = "BlueStarryGlassBlock",
    509 => VOID_MONOLITH = "VoidMonolith",
    510 => ARROW_SIGN = "ArrowSign",
    511 => PAINTED_ARROW_SIGN = "PaintedArrowSign",
    512 => GREEN_MOSS_BRICK = "GreenMossBrick",
    513 => BROWN_MOSS_BRICK = "BrownMossBrick",
    514 => RED_MOSS_BRICK = "RedMossBrick",
    515 => BLUE_MOSS_BRICK = "BlueMossBrick",
    516 => PURPLE_MOSS_BRICK = "PurpleMossBrick",
    517 => LAVA_MOSS_BRICK = "LavaMossBrick",
    518 => LILY_PAD = "LilyPad",
    519 => CATTAIL = "Cattail",
    520 => FOOD_PLATTER = "FoodPlatter",
    521 => BLACK_DRAGONFLY_JAR = "BlackDragonflyJar",
    522 => BLUE_DRAGONFLY_JAR = "BlueDragonflyJar",
    523 => GREEN_DRAGONFLY_JAR = "GreenDragonflyJar",
    524 => ORANGE_DRAGONFLY_JAR = "OrangeDragonflyJar",
    525 => RED_DRAGONFLY_JAR = "RedDragonflyJar",
    526 => YELLOW_DRAGONFLY_JAR = "YellowDragonflyJar",
    527 => GOLD_DRAGONFLY_JAR = "GoldDragonflyJar",
    528 => MUSHROOM_VINES = "MushroomVines",
    529 => SEA_OATS = "SeaOats",
    530 => OASIS_PLANTS = "OasisPlants",
    531 => BOULDER_STATUE = "BoulderStatue",
    532 => MAGGOT_CAGE = "MaggotCage",
    533 => RAT_CAGE = "RatCage",
    534 => KRYPTON_MOSS = "KryptonMoss",
    535 => KRYPTON_MOSS_BRICK = "KryptonMossBrick",
    536 => XENON_MOSS = "XenonMoss",
    537 => XENON_MOSS_BRICK = "XenonMossBrick",
    538 => LADYBUG_CAGE = "LadybugCage",
    539 => ARGON_MOSS = "ArgonMoss",
    540 => ARGON_MOSS_BRICK = "ArgonMossBrick",
    541 => ECHO_BLOCK = "EchoBlock",
    542 => OWL_CAGE = "OwlCage",
    543 => PUPFISH_CAGE = "PupfishCage",
    544 => GOLD_LADYBUG_CAGE = "GoldLadybugCage",
    545 => LAWN_FLAMINGO = "LawnFlamingo",
    546 => GRATE = "Grate",
    547 => POTTED_PLANTS1 = "PottedPlants1",
    548 => POTTED_PLANTS2 = "PottedPlants2",
    549 => SEAWEED = "Seaweed",
    550 => TURTLE_CAGE = "TurtleCage",
    551 => TURTLE_JUNGLE_CAGE = "TurtleJungleCage",
    552 => SANDCASTLES = "Sandcastles",
    553 => GREBE_CAGE = "GrebeCage",
    554 => SEAGULL_CAGE = "SeagullCage",
    555 => WATER_STRIDER_CAGE = "WaterStriderCage",
    556 => GOLD_WATER_STRIDER_CAGE = "GoldWaterStriderCage",
    557 => GRATE_CLOSED = "GrateClosed",
    558 => SEAHORSE_CAGE = "SeahorseCage",
    559 => GOLD_SEAHORSE_CAGE = "GoldSeahorseCage",
    560 => GOLF_TROPHIES = "GolfTrophies",
    561 => MARBLE_COLUMN = "MarbleColumn",
    562 => BAMBOO_BLOCK = "BambooBlock",
    563 => LARGE_BAMBOO_BLOCK = "LargeBambooBlock",
    564 => PLASMA_LAMP = "PlasmaLamp",
    565 => FOG_MACHINE = "FogMachine",
    566 => AMBER_STONE_BLOCK = "AmberStoneBlock",
    567 => GARDEN_GNOME = "GardenGnome",
    568 => PINK_FAIRY_JAR = "PinkFairyJar",
    569 => GREEN_FAIRY_JAR = "GreenFairyJar",
    570 => BLUE_FAIRY_JAR = "BlueFairyJar",
    571 => BAMBOO = "Bamboo",
    572 => SOUL_BOTTLES = "SoulBottles",
    573 => TATTERED_WOOD_SIGN = "TatteredWoodSign",
    574 => BOREAL_BEAM = "BorealBeam",
    575 => RICH_MAHOGANY_BEAM = "RichMahoganyBeam",
    576 => GRANITE_COLUMN = "GraniteColumn",
    577 => SANDSTONE_COLUMN = "SandstoneColumn",
    578 => MUSHROOM_BEAM = "MushroomBeam",
    579 => ROCK_GOLEM_HEAD = "RockGolemHead",
    580 => HELL_BUTTERFLY_JAR = "HellButterflyJar",
    581 => LAVAFLYINA_BOTTLE = "LavaflyinaBottle",
    582 => MAGMA_SNAIL_CAGE = "MagmaSnailCage",
    583 => TREE_TOPAZ = "TreeTopaz",
    584 => TREE_AMETHYST = "TreeAmethyst",
    585 => TREE_SAPPHIRE = "TreeSapphire",
    586 => TREE_EMERALD = "TreeEmerald",
    587 => TREE_RUBY = "TreeRuby",
    588 => TREE_DIAMOND = "TreeDiamond",
    589 => TREE_AMBER = "TreeAmber",
    590 => GEM_SAPLINGS = "GemSaplings",
    591 => POTS_SUSPENDED = "PotsSuspended",
    592 => BRAZIER_SUSPENDED = "BrazierSuspended",
    593 => VOLCANO_SMALL = "VolcanoSmall",
    594 => VOLCANO_LARGE = "VolcanoLarge",
    595 => VANITY_TREE_SAKURA_SAPLINGS = "VanityTreeSakuraSaplings",
    596 => VANITY_TREE_SAKURA = "VanityTreeSakura",
    597 => TELEPORTATION_PYLON = "TeleportationPylon",
    598 => LAVAFISH_BOWL = "LavafishBowl",
    599 => AMETHYST_BUNNY_CAGE = "AmethystBunnyCage",
    600 => TOPAZ_BUNNY_CAGE = "TopazBunnyCage",
    601 => SAPPHIRE_BUNNY_CAGE = "SapphireBunnyCage",
    602 => EMERALD_BUNNY_CAGE = "EmeraldBunnyCage",
    603 => RUBY_BUNNY_CAGE = "RubyBunnyCage",
    604 => DIAMOND_BUNNY_CAGE = "DiamondBunnyCage",
    605 => AMBER_BUNNY_CAGE = "AmberBunnyCage",
    606 => AMETHYST_SQUIRREL_CAGE = "AmethystSquirrelCage",
    607 => TOPAZ_SQUIRREL_CAGE = "TopazSquirrelCage",
    608 => SAPPHIRE_SQUIRREL_CAGE = "SapphireSquirrelCage",
    609 => EMERALD_SQUIRREL_CAGE = "EmeraldSquirrelCage",
    610 => RUBY_SQUIRREL_CAGE = "RubySquirrelCage",
    611 => DIAMOND_SQUIRREL_CAGE = "DiamondSquirrelCage",
    612 => AMBER_SQUIRREL_CAGE = "AmberSquirrelCage",
    613 => POTTED_LAVA_PLANTS = "PottedLavaPlants",
    614 => POTTED_LAVA_PLANT_TENDRILS = "PottedLavaPlantTendrils",
    615 => VANITY_TREE_WILLOW_SAPLINGS = "VanityTreeWillowSaplings",
    616 => VANITY_TREE_YELLOW_WILLOW = "VanityTreeYellowWillow",
    617 => MASTER_TROPHY_BASE = "MasterTrophyBase",
    618 => ACCENT_SLAB = "AccentSlab",
    619 => TRUFFLE_WORM_CAGE = "TruffleWormCage",
    620 => EMPRESS_BUTTERFLY_JAR = "EmpressButterflyJar",
    621 => SLICE_OF_CAKE = "SliceOfCake",
    622 => TEA_KETTLE = "TeaKettle",
    623 => POTTED_CRYSTAL_PLANTS = "PottedCrystalPlants",
    624 => ABIGAILS_FLOWER = "AbigailsFlower",
    625 => VIOLET_MOSS_BRICK = "VioletMossBrick",
    626 => VIOLET_MOSS = "VioletMoss",
    627 => RAINBOW_MOSS_BRICK = "RainbowMossBrick",
    628 => RAINBOW_MOSS = "RainbowMoss",
    629 => STINKBUG_CAGE = "StinkbugCage",
    630 => STINKBUG_HOUSING_BLOCKER = "StinkbugHousingBlocker",
    631 => STINKBUG_HOUSING_BLOCKER_ECHO = "StinkbugHousingBlockerEcho",
    632 => CHLOROPHYTE_EXTRACTINATOR = "ChlorophyteExtractinator",
    633 => ASH_GRASS = "AshGrass",
    634 => TREE_ASH = "TreeAsh",
    635 => ASH_WOOD = "AshWood",
    636 => CORRUPT_VINES = "CorruptVines",
    637 => ASH_PLANTS = "AshPlants",
    638 => ASH_VINES = "AshVines",
    639 => MANA_CRYSTAL = "ManaCrystal",
    640 => REEF_BLOCK = "ReefBlock",
    641 => LIFE_CRYSTAL_BOULDER = "LifeCrystalBoulder",
    642 => BOUNCY_BOULDER = "BouncyBoulder",
    643 => SPIKY_BALL = "SpikyBall",
    644 => DEAD_CELLS_DISPLAY_JAR = "DeadCellsDisplayJar",
    645 => CORAL_PILE = "CoralPile",
    646 => POTS_ECHO = "PotsEcho",
    647 => CRYSTAL_BALL_ECHO = "CrystalBallEcho",
    648 => GRATE_ECHO = "GrateEcho",
    649 => FISHING_CRATES = "FishingCrates",
    650 => LAVA_MOSS_BLOCK = "LavaMossBlock",
    651 => KRYPTON_MOSS_BLOCK = "KryptonMossBlock",
    652 => XENON_MOSS_BLOCK = "XenonMossBlock",
    653 => ARGON_MOSS_BLOCK = "ArgonMossBlock",
    654 => VIOLET_MOSS_BLOCK = "VioletMossBlock",
    655 => PLANTERA_THORNS = "PlanteraThorns",
    656 => GLOW_TULIP = "GlowTulip",
    657 => ECHO_MONOLITH = "EchoMonolith",
    658 => SHIMMER_MONOLITH = "ShimmerMonolith",
    659 => SHIMMER_BLOCK = "ShimmerBlock",
    660 => SHIMMERFLYINA_BOTTLE = "ShimmerflyinaBottle",
    661 => CORRUPT_JUNGLE_GRASS = "CorruptJungleGrass",
    662 => CRIMSON_JUNGLE_GRASS = "CrimsonJungleGrass",
    663 => MOONDIAL = "Moondial",
    664 => WAFFLE_IRON = "WaffleIron",
    665 => BOUNCY_BOULDER_TRAP = "BouncyBoulderTrap",
    666 => POOP_BLOCK = "PoopBlock",
    667 => SHIMMER_BRICK = "ShimmerBrick",
    668 => DIRTIEST_BLOCK = "DirtiestBlock",
    669 => LUNAR_RUST_BRICK = "LunarRustBrick",
    670 => DARK_CELESTIAL_BRICK = "DarkCelestialBrick",
    671 => ASTRA_BRICK = "AstraBrick",
    672 => COSMIC_EMBER_BRICK = "CosmicEmberBrick",
    673 => CRYOCORE_BRICK = "CryocoreBrick",
    674 => MERCURY_BRICK = "MercuryBrick",
    675 => STAR_ROYALE_BRICK = "StarRoyaleBrick",
    676 => HEAVENFORGE_BRICK = "HeavenforgeBrick",
    677 => ANCIENT_BLUE_BRICK = "AncientBlueBrick",
    678 => ANCIENT_GREEN_BRICK = "AncientGreenBrick",
    679 => ANCIENT_PINK_BRICK = "AncientPinkBrick",
    680 => ANCIENT_GOLD_BRICK = "AncientGoldBrick",
    681 => ANCIENT_SILVER_BRICK = "AncientSilverBrick",
    682 => ANCIENT_COPPER_BRICK = "AncientCopperBrick",
    683 => ANCIENT_COBALT_BRICK = "AncientCobaltBrick",
    684 => ANCIENT_MYTHRIL_BRICK = "AncientMythrilBrick",
    685 => ANCIENT_OBSIDIAN_BRICK = "AncientObsidianBrick",
    686 => ANCIENT_HELLSTONE_BRICK = "AncientHellstoneBrick",
    687 => RAINBOW_MOSS_BLOCK = "RainbowMossBlock",
    688 => GREEN_MOSS_BLOCK = "GreenMossBlock",
    689 => BROWN_MOSS_BLOCK = "BrownMossBlock",
    690 => RED_MOSS_BLOCK = "RedMossBlock",
    691 => BLUE_MOSS_BLOCK = "BlueMossBlock",
    692 => PURPLE_MOSS_BLOCK = "PurpleMossBlock",
}
